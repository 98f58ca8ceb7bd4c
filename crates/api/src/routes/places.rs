use axum::routing::{get, post};
use axum::Router;

use super::upload_body_limit;
use crate::handlers::{media, places};
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET    /                    -> list (?kind=&city_id=)
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// POST   /{id}/booking-quote  -> booking_quote
/// GET    /{id}/photos         -> media::list_for_place
/// POST   /{id}/photos         -> media::upload (multipart: file, alt)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(places::list).post(places::create))
        .route(
            "/{id}",
            get(places::get_by_id)
                .put(places::update)
                .delete(places::delete),
        )
        .route("/{id}/booking-quote", post(places::booking_quote))
        .route(
            "/{id}/photos",
            get(media::list_for_place)
                .post(media::upload)
                .layer(upload_body_limit(max_upload_bytes)),
        )
}
