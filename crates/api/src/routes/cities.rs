use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// Routes mounted at `/cities`.
///
/// ```text
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/places     -> list_places
/// GET    /{id}/figures    -> list_figures
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(cities::create))
        .route(
            "/{id}",
            get(cities::get_by_id)
                .put(cities::update)
                .delete(cities::delete),
        )
        .route("/{id}/places", get(cities::list_places))
        .route("/{id}/figures", get(cities::list_figures))
}
