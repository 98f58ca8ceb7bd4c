//! Role gates for staff routes.
//!
//! Editors manage directory content. Deleting a whole department, with
//! everything under it, is kept for admins. Both extractors answer 401
//! without a token and 403 for a role that falls short.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ayiti_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Admin-only routes (department deletion).
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Content writes: departments, cities, places, figures and photos.
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.can_edit() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor or Admin role required".into(),
            )));
        }
        Ok(RequireEditor(user))
    }
}
