//! Server-rendered HTML pages.
//!
//! Pages never return JSON errors. A missing or unpublished record renders
//! the not-found page with 404; a database failure on the main query
//! renders the "temporarily unavailable" page with 503. Secondary sections
//! (photos, figures, side lists) degrade to empty via
//! [`ayiti_db::safe_db_operation`].

pub mod departments;
pub mod figures;
pub mod home;
pub mod layout;
pub mod listings;
pub mod map;
pub mod places;
pub mod pricing;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Failure modes of a page handler.
#[derive(Debug)]
pub enum PageError {
    NotFound,
    Unavailable,
}

pub type PageResult = Result<Html<String>, PageError>;

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        tracing::warn!(error = %err, "Page query failed");
        PageError::Unavailable
    }
}

// Malformed ids and query strings name no page.
impl From<PathRejection> for PageError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Unusable page path");
        PageError::NotFound
    }
}

impl From<QueryRejection> for PageError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "Unusable page query");
        PageError::NotFound
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, render(layout::not_found())).into_response()
            }
            PageError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                render(layout::unavailable()),
            )
                .into_response(),
        }
    }
}

/// Fallback for unmatched page paths.
pub async fn not_found_fallback() -> PageError {
    PageError::NotFound
}

pub(crate) fn render(markup: maud::Markup) -> Html<String> {
    Html(markup.into_string())
}

/// Unwrap an optional record, treating missing and unpublished alike.
pub(crate) fn published<T>(
    record: Option<T>,
    is_published: impl Fn(&T) -> bool,
) -> Result<T, PageError> {
    record.filter(|r| is_published(r)).ok_or(PageError::NotFound)
}
