use serde::{Deserialize, Serialize};
use types::{SortOrder, User, UserId};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Registration and login share a shape.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Empty/omitted fields mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<UserId>,
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PremiumEventRequest {
    pub event: String,
    #[serde(default)]
    pub data: PremiumEventData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PremiumEventData {
    pub user_id: Option<UserId>,
}
