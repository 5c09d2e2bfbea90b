use crate::auth::ApiCaller;
use crate::error::AppError;
use crate::models::PremiumEventRequest;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// Payment-provider callback that upgrades a user to premium.
///
/// Authenticated by the operator API key. Events we don't recognize
/// are acknowledged and ignored so the provider stops retrying.
pub async fn premium_event(
    State(state): State<AppState>,
    _caller: ApiCaller,
    Json(payload): Json<PremiumEventRequest>,
) -> Result<StatusCode, AppError> {
    if payload.event != "user.upgraded" {
        return Ok(StatusCode::OK);
    }

    let user_id = payload
        .data
        .user_id
        .ok_or_else(|| AppError::BadRequest("missing user_id".into()))?;

    state.repo.update_user(user_id, "", "", true)?;
    Ok(StatusCode::OK)
}
