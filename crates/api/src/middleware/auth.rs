//! Staff authentication: the bearer token carried by editor and admin
//! requests to the content API.
//!
//! Public pages and read-only API routes never touch this extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ayiti_core::error::CoreError;
use ayiti_core::roles::{ROLE_ADMIN, ROLE_EDITOR};
use ayiti_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Staff member behind a valid access token.
///
/// Handlers normally take [`RequireEditor`](super::rbac::RequireEditor) or
/// [`RequireAdmin`](super::rbac::RequireAdmin) instead, which wrap this.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// `users.id` of the account, from `claims.sub`.
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Editors and admins may change directory content.
    pub fn can_edit(&self) -> bool {
        self.is_admin() || self.role == ROLE_EDITOR
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthorized("Sign in to manage directory content"))?;
        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| unauthorized("Expected 'Authorization: Bearer <token>'"))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected staff token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> AuthUser {
        AuthUser {
            user_id: 1,
            role: role.into(),
        }
    }

    #[test]
    fn role_checks() {
        assert!(user("admin").is_admin());
        assert!(user("admin").can_edit());
        assert!(user("editor").can_edit());
        assert!(!user("editor").is_admin());
        assert!(!user("guest").can_edit());
    }
}
