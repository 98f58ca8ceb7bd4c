use axum::routing::{get, post};
use axum::Router;

use crate::handlers::figures;
use crate::state::AppState;

/// Routes mounted at `/figures`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(figures::create)).route(
        "/{id}",
        get(figures::get_by_id)
            .put(figures::update)
            .delete(figures::delete),
    )
}
