use axum::routing::get;
use axum::Router;

use crate::handlers::business_plans;
use crate::state::AppState;

/// Routes mounted at `/business-plans`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(business_plans::list))
}
