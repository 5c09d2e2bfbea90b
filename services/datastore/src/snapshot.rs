//! Snapshot Store — whole-file JSON persistence under a reader/writer lock
//!
//! The `Snapshot` is the aggregate root: the complete image of all
//! persisted entities plus the identity counters. The `SnapshotStore`
//! exclusively owns the on-disk file; everything else only ever sees
//! copies materialized by a load and routes durable changes back
//! through a write.
//!
//! Writes go to a sibling temp file, are fsynced, then renamed over the
//! target, so an interrupted write leaves the previous image as the
//! last known-good state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use types::{Post, PostId, UserId, UserRecord};

use crate::error::DatastoreError;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

// ── Snapshot ────────────────────────────────────────────────────────

/// The complete in-memory image of all persisted entities.
///
/// `BTreeMap` keeps the serialized document in stable key order. Every
/// member defaults, so a file with absent or unknown members loads as
/// empty collections rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Posts keyed by post id.
    pub posts: BTreeMap<u64, Post>,
    /// Users keyed by user id.
    pub users: BTreeMap<u64, UserRecord>,
    /// Revoked refresh-token strings with their revocation time.
    pub revoked_tokens: BTreeMap<String, DateTime<Utc>>,
    /// Next post id to hand out. Monotonic: deletions never roll it back.
    pub next_post_id: u64,
    /// Next user id to hand out.
    pub next_user_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            posts: BTreeMap::new(),
            users: BTreeMap::new(),
            revoked_tokens: BTreeMap::new(),
            next_post_id: 1,
            next_user_id: 1,
        }
    }

    pub fn allocate_post_id(&mut self) -> PostId {
        let id = self.next_post_id;
        self.next_post_id += 1;
        PostId::new(id)
    }

    pub fn allocate_user_id(&mut self) -> UserId {
        let id = self.next_user_id;
        self.next_user_id += 1;
        UserId::new(id)
    }

    /// Look up a user by exact (case-sensitive) email.
    pub fn find_user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.values().find(|u| u.email == email)
    }

    /// Bring the counters at least past every stored id.
    ///
    /// Files written before the counters existed have none; they load
    /// as `max(id)+1` so ids still never repeat.
    fn restore_counters(&mut self) {
        let floor = self.posts.keys().next_back().map_or(1, |id| id + 1);
        self.next_post_id = self.next_post_id.max(floor);

        let floor = self.users.keys().next_back().map_or(1, |id| id + 1);
        self.next_user_id = self.next_user_id.max(floor);
    }
}

// ── Snapshot Store ──────────────────────────────────────────────────

/// Owns the snapshot file and the lock that serializes access to it.
///
/// One lock per database file: readers share it, writers exclude
/// everyone. Each public operation is a bounded, self-contained
/// critical section; the guard is released on every exit path.
pub struct SnapshotStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl SnapshotStore {
    /// Handle to a snapshot file. No I/O happens until the first call.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with an empty snapshot if it is absent. Idempotent.
    pub fn ensure_exists(&self) -> Result<(), SnapshotError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        if self.path.exists() {
            return Ok(());
        }
        self.write_unlocked(&Snapshot::empty())
    }

    /// Read the whole snapshot under the shared lock.
    pub fn load(&self) -> Result<Snapshot, SnapshotError> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        self.read_unlocked()
    }

    /// Replace the whole snapshot under the exclusive lock.
    pub fn write(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        self.write_unlocked(snapshot)
    }

    /// Run a read-modify-write as one exclusive critical section.
    ///
    /// Identity assignment and uniqueness checks read current state and
    /// then write; holding the exclusive lock across both is what keeps
    /// two concurrent creators from computing the same next id. The
    /// closure is crate-internal, does no I/O, and nothing is written
    /// if it fails.
    pub(crate) fn update<T>(
        &self,
        op: impl FnOnce(&mut Snapshot) -> Result<T, DatastoreError>,
    ) -> Result<T, DatastoreError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let mut snapshot = self.read_unlocked()?;
        let out = op(&mut snapshot)?;
        self.write_unlocked(&snapshot)?;
        Ok(out)
    }

    fn read_unlocked(&self) -> Result<Snapshot, SnapshotError> {
        let bytes = fs::read(&self.path)?;
        let mut snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        snapshot.restore_counters();
        Ok(snapshot)
    }

    /// Write to temp, fsync, rename. An interrupted write never
    /// clobbers the previous file contents.
    fn write_unlocked(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
