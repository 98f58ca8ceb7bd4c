use axum::routing::delete;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/photos`. Uploads live under `/places/{id}/photos`.
///
/// ```text
/// DELETE /{id}    -> media::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(media::delete))
}
