pub mod auth;
pub mod business_plans;
pub mod cities;
pub mod departments;
pub mod dev;
pub mod figures;
pub mod health;
pub mod listings;
pub mod pages;
pub mod photos;
pub mod places;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::pages::not_found_fallback;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
///
/// /departments                                     list, create
/// /departments/{id}                                get, update, delete (admin)
/// /departments/{id}/cities                         published cities
///
/// /cities                                          create
/// /cities/{id}                                     get, update, delete
/// /cities/{id}/places                              published places
/// /cities/{id}/figures                             published figures
///
/// /places                                          list (?kind=&city_id=), create
/// /places/{id}                                     get, update, delete
/// /places/{id}/booking-quote                       price a stay (POST)
/// /places/{id}/photos                              list, upload (multipart POST)
/// /photos/{id}                                     delete
///
/// /figures                                         create
/// /figures/{id}                                    get, update, delete
///
/// /business-plans                                  list
///
/// /listings                                        submit (POST)
/// /listings/validate                               validate one step (POST)
///
/// /dev/counts                                      row counts (EXPOSE_DEV_ROUTES only)
/// ```
///
/// Writes require an editor or admin bearer token.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new()
        .nest("/auth", auth::router())
        .nest("/departments", departments::router())
        .nest("/cities", cities::router())
        .nest("/places", places::router(config.max_upload_bytes))
        .nest("/photos", photos::router())
        .nest("/figures", figures::router())
        .nest("/business-plans", business_plans::router())
        .nest("/listings", listings::router());

    if config.expose_dev_routes {
        tracing::warn!("Dev routes exposed under /api/v1/dev");
        router.nest("/dev", dev::router())
    } else {
        router
    }
}

/// The complete application: health, HTML pages, `/uploads` and `/api/v1`.
///
/// Middleware layers are added by the caller.
pub fn app_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        // Health check at root level (not under /api/v1).
        .merge(health::router())
        .merge(pages::router())
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .nest("/api/v1", api_routes(config))
        .fallback(not_found_fallback)
}

/// Body limit for photo uploads: the file plus room for multipart framing.
pub(crate) fn upload_body_limit(max_upload_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_upload_bytes.saturating_add(64 * 1024))
}
