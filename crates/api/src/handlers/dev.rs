//! Development-only diagnostics. Mounted only when `EXPOSE_DEV_ROUTES` is set.

use axum::extract::State;
use axum::Json;
use ayiti_db::models::stats::TableCount;
use ayiti_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dev/counts
pub async fn counts(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TableCount>>>> {
    let counts = StatsRepo::table_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
