//! Revocation Ledger — the persisted set of explicitly invalidated tokens
//!
//! Refresh tokens live for a long time; this is the kill switch. The
//! refresh flow must consult `is_revoked` before honoring a token that
//! is otherwise cryptographically valid and unexpired.

use std::sync::Arc;

use chrono::Utc;

use crate::error::DatastoreError;
use crate::snapshot::SnapshotStore;

/// Membership set of revoked token strings, persisted through the
/// shared snapshot store.
#[derive(Clone)]
pub struct RevocationLedger {
    store: Arc<SnapshotStore>,
}

impl RevocationLedger {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// Record a token as revoked. Idempotent: re-revoking just
    /// refreshes the timestamp.
    pub fn revoke(&self, token: &str) -> Result<(), DatastoreError> {
        self.store.update(|snapshot| {
            snapshot.revoked_tokens.insert(token.to_owned(), Utc::now());
            Ok(())
        })
    }

    pub fn is_revoked(&self, token: &str) -> Result<bool, DatastoreError> {
        let snapshot = self.store.load()?;
        Ok(snapshot.revoked_tokens.contains_key(token))
    }
}
