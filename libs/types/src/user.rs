//! User entities: the persisted record and its public view
//!
//! `UserRecord` is what the snapshot file stores and is the only type
//! that carries the password hash. Everything that leaves the datastore
//! is a `User`, which has no credential fields at all: stripping is
//! done by the type system, not by remembering to blank a field.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Persisted user row, including the credential hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    /// PHC-format hash string; never exposed outside the datastore.
    pub password_hash: String,
    #[serde(default)]
    pub is_premium: bool,
}

impl UserRecord {
    /// Credential-free view for returning to callers.
    pub fn view(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            is_premium: self.is_premium,
        }
    }
}

/// Public user view — no credential material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub is_premium: bool,
}
