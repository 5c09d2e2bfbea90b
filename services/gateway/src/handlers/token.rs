use crate::auth::bearer_token;
use crate::error::AppError;
use crate::models::RefreshResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use tokens::TokenScope;

/// Exchange a valid, unrevoked refresh token for a new access token.
///
/// The refresh token itself stays valid: multi-use until explicitly
/// revoked or expired.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let refresh_token = bearer_token(&headers)?;
    let claims = state.tokens.verify(&refresh_token, TokenScope::Refresh)?;

    // Signature and expiry alone are not enough; the ledger has the
    // final word.
    if state.ledger.is_revoked(&refresh_token)? {
        return Err(AppError::Unauthorized("token revoked".into()));
    }

    let token = state.tokens.issue(
        claims.subject()?,
        TokenScope::Access,
        TokenScope::Access.default_ttl(),
    )?;

    Ok(Json(RefreshResponse { token }))
}

pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let refresh_token = bearer_token(&headers)?;
    state.tokens.verify(&refresh_token, TokenScope::Refresh)?;

    state.ledger.revoke(&refresh_token)?;
    Ok(StatusCode::OK)
}
