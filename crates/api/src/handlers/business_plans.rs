//! Handlers for the `/business-plans` resource.

use axum::extract::State;
use axum::Json;
use ayiti_db::models::business_plan::BusinessPlan;
use ayiti_db::repositories::BusinessPlanRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/business-plans
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BusinessPlan>>>> {
    let plans = BusinessPlanRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: plans }))
}
