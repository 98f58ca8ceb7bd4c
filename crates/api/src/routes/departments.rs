use axum::routing::get;
use axum::Router;

use crate::handlers::departments;
use crate::state::AppState;

/// Routes mounted at `/departments`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/cities     -> list_cities
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(departments::list).post(departments::create))
        .route(
            "/{id}",
            get(departments::get_by_id)
                .put(departments::update)
                .delete(departments::delete),
        )
        .route("/{id}/cities", get(departments::list_cities))
}
