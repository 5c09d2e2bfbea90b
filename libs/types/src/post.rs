//! Post entity and listing options

use crate::ids::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// A short published message
///
/// The body stored here has already been through moderation; it is
/// immutable except for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub body: String,
}

/// Ordering for post listings, by id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
