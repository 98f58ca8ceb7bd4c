use axum::routing::post;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// POST /            -> submit
/// POST /validate    -> validate_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(listings::submit))
        .route("/validate", post(listings::validate_step))
}
