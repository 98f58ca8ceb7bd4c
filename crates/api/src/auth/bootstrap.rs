//! First-run admin account.

use ayiti_core::roles::ROLE_ADMIN;
use ayiti_core::types::DbId;
use ayiti_db::models::user::CreateUser;
use ayiti_db::repositories::UserRepo;
use ayiti_db::DbPool;

use super::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Result of [`ensure_admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    Created(DbId),
    AlreadyExists(DbId),
}

/// Create an admin account for `email` unless one is already registered.
///
/// An existing account is left untouched, whatever its role or password.
pub async fn ensure_admin(pool: &DbPool, email: &str, password: &str) -> AppResult<AdminBootstrap> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::BadRequest("Admin email must not be empty".into()));
    }

    if let Some(existing) = UserRepo::find_by_email(pool, &email).await? {
        return Ok(AdminBootstrap::AlreadyExists(existing.id));
    }

    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email,
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;
    Ok(AdminBootstrap::Created(user.id))
}
