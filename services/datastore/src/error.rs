//! Error taxonomy for datastore operations

use crate::snapshot::SnapshotError;
use thiserror::Error;

/// Everything a repository or ledger operation can fail with.
///
/// Persistence failures are wrapped, not retried; callers own any
/// retry policy.
#[derive(Error, Debug)]
pub enum DatastoreError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("not found")]
    NotFound,

    #[error("email exists")]
    DuplicateEmail,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("post body too long: {len} characters")]
    BodyTooLong { len: usize },

    #[error("password hashing failed")]
    Credential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_too_long_display() {
        let err = DatastoreError::BodyTooLong { len: 141 };
        assert_eq!(err.to_string(), "post body too long: 141 characters");
    }

    #[test]
    fn test_snapshot_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: DatastoreError = SnapshotError::from(io).into();
        assert!(matches!(err, DatastoreError::Snapshot(SnapshotError::Io(_))));
    }
}
