//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_db::models::user::UserResponse;
use ayiti_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");
    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/me
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let found = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Account no longer active".into())))?;
    Ok(Json(UserResponse::from(&found)))
}
