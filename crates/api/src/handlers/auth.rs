//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::account::{LoginInput, RegisterInput};
use catalog_core::error::CoreError;
use catalog_core::roles::Role;
use catalog_db::models::user::{CreateUser, User, UserResponse};
use catalog_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{AuthResponse, MeResponse};
use crate::state::AppState;

const USER_EXISTS: &str = "User already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a `user`-role account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let Json(input) = payload?;
    let input = input.into_checked()?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
        || UserRepo::find_by_username(&state.pool, &input.username)
            .await?
            .is_some()
    {
        return Err(AppError::BadRequest(USER_EXISTS.into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role: Role::User,
        },
    )
    .await
    .map_err(|e| match e {
        // Lost a race with a concurrent registration.
        sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505") => {
            AppError::BadRequest(USER_EXISTS.into())
        }
        other => AppError::Database(other),
    })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = issue_token(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let Json(input) = payload?;
    let input = input.into_checked()?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(issue_token(&state, &user)?))
}

/// GET /api/auth/me
pub async fn me(user: AuthUser) -> AppResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        success: true,
        user: UserResponse::new(&user.account, user.role),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// Sign a fresh access token for `user` and wrap it with the public profile.
fn issue_token(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let role = user.role()?;
    let token = generate_access_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        success: true,
        token,
        user: UserResponse::new(user, role),
    })
}
