use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{CredentialsRequest, LoginResponse, UpdateUserRequest};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use tokens::TokenScope;
use types::User;

// Argon2 hashing is deliberately slow, so the handlers that trigger it
// run the repository call on the blocking pool.

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let repo = state.repo.clone();
    let user = tokio::task::spawn_blocking(move || {
        repo.create_user(&payload.email, &payload.password)
    })
    .await
    .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))??;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    let repo = state.repo.clone();
    let updated = tokio::task::spawn_blocking(move || {
        repo.update_user(user.user_id, &payload.email, &payload.password, false)
    })
    .await
    .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))??;

    Ok(Json(updated))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = state.repo.clone();
    let user = tokio::task::spawn_blocking(move || {
        repo.authenticate(&payload.email, &payload.password)
    })
    .await
    .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))??;

    let token = state
        .tokens
        .issue(user.id, TokenScope::Access, TokenScope::Access.default_ttl())?;
    let refresh_token = state
        .tokens
        .issue(user.id, TokenScope::Refresh, TokenScope::Refresh.default_ttl())?;

    Ok(Json(LoginResponse {
        user,
        token,
        refresh_token,
    }))
}
