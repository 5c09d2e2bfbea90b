//! Snapshot-backed datastore for the roost posting backend
//!
//! Stores every entity (posts, users, revoked tokens) in one
//! whole-file JSON document guarded by a single reader/writer lock.
//! Every mutation loads the full image, changes it in memory, and
//! atomically replaces the file. This trades write throughput for
//! simplicity and crash-consistency, which is the right trade at this
//! write volume.
//!
//! Modules:
//! - `snapshot`: the aggregate image and the locked file store
//! - `repository`: Create/Get/List/Delete/Update for posts and users
//! - `credentials`: salted argon2 password hashing, fail-closed
//! - `moderation`: deterministic banned-word censoring
//! - `ledger`: the persisted set of revoked refresh tokens

pub mod credentials;
pub mod error;
pub mod ledger;
pub mod moderation;
pub mod repository;
pub mod snapshot;

pub use error::DatastoreError;
pub use ledger::RevocationLedger;
pub use repository::Repository;
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
