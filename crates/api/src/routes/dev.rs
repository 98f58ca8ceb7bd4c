use axum::routing::get;
use axum::Router;

use crate::handlers::dev;
use crate::state::AppState;

/// Routes mounted at `/dev`. Only nested when `EXPOSE_DEV_ROUTES` is enabled.
pub fn router() -> Router<AppState> {
    Router::new().route("/counts", get(dev::counts))
}
