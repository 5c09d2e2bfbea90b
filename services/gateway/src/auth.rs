use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use tokens::TokenScope;
use types::UserId;

/// Pull the credential out of `Authorization: <scheme> <credential>`.
fn authorization_credential<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("no auth header included in request".into()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("invalid auth header".into()))?;

    match value.split_once(' ') {
        Some((s, credential)) if s == scheme && !credential.is_empty() => Ok(credential),
        _ => Err(AppError::Unauthorized("malformed authorization header".into())),
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    authorization_credential(headers, "Bearer").map(str::to_owned)
}

/// A caller holding a valid, unexpired access token.
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        let claims = state.tokens.verify(&token, TokenScope::Access)?;

        Ok(AuthenticatedUser {
            user_id: claims.subject()?,
        })
    }
}

/// A caller presenting the operator API key (`Authorization: ApiKey <key>`).
pub struct ApiCaller;

impl<S> FromRequestParts<S> for ApiCaller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let key = authorization_credential(&parts.headers, "ApiKey")?;

        if key != state.api_key.as_ref() {
            return Err(AppError::Unauthorized("api key invalid".into()));
        }
        Ok(ApiCaller)
    }
}
