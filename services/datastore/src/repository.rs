//! Entity Repository — Create/Get/List/Delete/Update over the snapshot store
//!
//! Every mutation runs inside the store's exclusive read-modify-write
//! section, so identity assignment and uniqueness checks are
//! linearizable. Reads take the shared lock only for the file read.
//! Password hashing always happens outside the lock.

use std::sync::Arc;

use types::{Post, PostId, SortOrder, User, UserId, UserRecord};

use crate::credentials;
use crate::error::DatastoreError;
use crate::moderation;
use crate::snapshot::SnapshotStore;

/// Longest accepted post body, in characters, checked before moderation.
pub const MAX_POST_CHARS: usize = 140;

/// Typed operations over posts and users.
///
/// One instance per process, constructed at startup around the shared
/// store handle and passed to whoever needs it.
#[derive(Clone)]
pub struct Repository {
    store: Arc<SnapshotStore>,
}

impl Repository {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// Publish a post.
    ///
    /// The length check applies to `body` as submitted; moderation
    /// rewriting happens after and only affects what is stored.
    pub fn create_post(&self, author: UserId, body: &str) -> Result<Post, DatastoreError> {
        let len = body.chars().count();
        if len > MAX_POST_CHARS {
            return Err(DatastoreError::BodyTooLong { len });
        }

        let body = moderation::censor(body);
        self.store.update(|snapshot| {
            let id = snapshot.allocate_post_id();
            let post = Post {
                id,
                author_id: author,
                body,
            };
            snapshot.posts.insert(id.as_u64(), post.clone());
            Ok(post)
        })
    }

    /// All posts, optionally filtered by author, ordered by id.
    pub fn list_posts(
        &self,
        author: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Post>, DatastoreError> {
        let snapshot = self.store.load()?;
        let mut posts: Vec<Post> = snapshot
            .posts
            .into_values()
            .filter(|post| author.is_none_or(|a| post.author_id == a))
            .collect();

        match order {
            SortOrder::Asc => posts.sort_by_key(|post| post.id),
            SortOrder::Desc => posts.sort_by(|a, b| b.id.cmp(&a.id)),
        }
        Ok(posts)
    }

    pub fn get_post(&self, id: PostId) -> Result<Post, DatastoreError> {
        let snapshot = self.store.load()?;
        snapshot
            .posts
            .get(&id.as_u64())
            .cloned()
            .ok_or(DatastoreError::NotFound)
    }

    /// Delete a post. Only its author may do this; anyone else gets
    /// `Forbidden` and the post stays.
    pub fn delete_post(&self, id: PostId, requester: UserId) -> Result<Post, DatastoreError> {
        self.store.update(|snapshot| {
            let post = snapshot
                .posts
                .remove(&id.as_u64())
                .ok_or(DatastoreError::NotFound)?;
            if post.author_id != requester {
                // A failed update is never written; the removal above
                // is discarded along with it.
                return Err(DatastoreError::Forbidden);
            }
            Ok(post)
        })
    }

    /// Register a user. Email uniqueness is byte-equality, checked in
    /// the same critical section as the insert.
    pub fn create_user(&self, email: &str, password: &str) -> Result<User, DatastoreError> {
        let password_hash = credentials::hash_password(password)?;
        self.store.update(|snapshot| {
            if snapshot.find_user_by_email(email).is_some() {
                return Err(DatastoreError::DuplicateEmail);
            }
            let id = snapshot.allocate_user_id();
            let record = UserRecord {
                id,
                email: email.to_owned(),
                password_hash,
                is_premium: false,
            };
            let user = record.view();
            snapshot.users.insert(id.as_u64(), record);
            Ok(user)
        })
    }

    /// Update a user's email and/or password; empty strings mean "no
    /// change". `promote` sets the premium flag and never unsets it.
    pub fn update_user(
        &self,
        id: UserId,
        email: &str,
        password: &str,
        promote: bool,
    ) -> Result<User, DatastoreError> {
        let new_hash = if password.is_empty() {
            None
        } else {
            Some(credentials::hash_password(password)?)
        };

        self.store.update(|snapshot| {
            let record = snapshot
                .users
                .get_mut(&id.as_u64())
                .ok_or(DatastoreError::NotFound)?;
            if !email.is_empty() {
                record.email = email.to_owned();
            }
            if let Some(hash) = new_hash {
                record.password_hash = hash;
            }
            if promote {
                record.is_premium = true;
            }
            Ok(record.view())
        })
    }

    /// Check credentials for an email, returning the credential-free
    /// user view on success.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, DatastoreError> {
        let snapshot = self.store.load()?;
        let record = snapshot
            .find_user_by_email(email)
            .ok_or(DatastoreError::NotFound)?;

        if !credentials::verify_password(&record.password_hash, password) {
            return Err(DatastoreError::Unauthorized);
        }
        Ok(record.view())
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(SnapshotStore::open(dir.path().join("db.json")));
        store.ensure_exists().unwrap();
        (dir, Repository::new(store))
    }

    #[test]
    fn test_clean_body_round_trips() {
        let (_dir, repo) = test_repo();
        let body = "I had something interesting for breakfast";
        let post = repo.create_post(UserId::new(1), body).unwrap();
        assert_eq!(post.body, body);
        assert_eq!(repo.get_post(post.id).unwrap().body, body);
    }

    #[test]
    fn test_sequential_ids_from_empty_store() {
        let (_dir, repo) = test_repo();
        let first = repo.create_post(UserId::new(1), "one").unwrap();
        let second = repo.create_post(UserId::new(1), "two").unwrap();
        assert_eq!(first.id, PostId::new(1));
        assert_eq!(second.id, PostId::new(2));
    }

    #[test]
    fn test_concurrent_creators_never_duplicate_ids() {
        let (_dir, repo) = test_repo();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = repo.clone();
                thread::spawn(move || {
                    (0..5)
                        .map(|i| {
                            repo.create_post(UserId::new(t), &format!("post {t}-{i}"))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} handed out twice");
            }
        }
        assert_eq!(seen.len(), 40);
    }

    #[test]
    fn test_moderation_rewrites_stored_body() {
        let (_dir, repo) = test_repo();
        let post = repo.create_post(UserId::new(1), "this is Sharbert").unwrap();
        assert_eq!(post.body, "this is ****");
        assert_eq!(repo.get_post(post.id).unwrap().body, "this is ****");
    }

    #[test]
    fn test_length_check_uses_original_body() {
        let (_dir, repo) = test_repo();

        let at_limit = "x".repeat(140);
        assert!(repo.create_post(UserId::new(1), &at_limit).is_ok());

        let over = "x".repeat(141);
        assert!(matches!(
            repo.create_post(UserId::new(1), &over),
            Err(DatastoreError::BodyTooLong { len: 141 })
        ));

        // 150 chars before moderation would shrink below the limit;
        // still rejected because the check precedes the rewrite.
        let shrinks = format!("kerfuffle {}", "y".repeat(140));
        assert!(matches!(
            repo.create_post(UserId::new(1), &shrinks),
            Err(DatastoreError::BodyTooLong { .. })
        ));
    }

    #[test]
    fn test_list_posts_filter_and_order() {
        let (_dir, repo) = test_repo();
        repo.create_post(UserId::new(1), "a").unwrap();
        repo.create_post(UserId::new(2), "b").unwrap();
        repo.create_post(UserId::new(1), "c").unwrap();

        let all = repo.list_posts(None, SortOrder::Asc).unwrap();
        assert_eq!(
            all.iter().map(|p| p.id.as_u64()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let desc = repo.list_posts(None, SortOrder::Desc).unwrap();
        assert_eq!(
            desc.iter().map(|p| p.id.as_u64()).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );

        let by_author = repo.list_posts(Some(UserId::new(1)), SortOrder::Asc).unwrap();
        assert_eq!(
            by_author.iter().map(|p| p.body.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_delete_post_author_only() {
        let (_dir, repo) = test_repo();
        let post = repo.create_post(UserId::new(1), "mine").unwrap();

        assert!(matches!(
            repo.delete_post(post.id, UserId::new(2)),
            Err(DatastoreError::Forbidden)
        ));
        // Still there after the forbidden attempt.
        assert!(repo.get_post(post.id).is_ok());

        let deleted = repo.delete_post(post.id, UserId::new(1)).unwrap();
        assert_eq!(deleted.id, post.id);

        // Second delete: gone.
        assert!(matches!(
            repo.delete_post(post.id, UserId::new(1)),
            Err(DatastoreError::NotFound)
        ));
    }

    #[test]
    fn test_deleted_post_id_never_reused() {
        let (_dir, repo) = test_repo();
        let first = repo.create_post(UserId::new(1), "one").unwrap();
        repo.delete_post(first.id, UserId::new(1)).unwrap();

        let next = repo.create_post(UserId::new(1), "two").unwrap();
        assert_eq!(next.id, PostId::new(2));
    }

    #[test]
    fn test_duplicate_email_leaves_store_unchanged() {
        let (_dir, repo) = test_repo();
        repo.create_user("a@example.com", "hunter2").unwrap();

        let before = repo.store.load().unwrap();
        assert!(matches!(
            repo.create_user("a@example.com", "different"),
            Err(DatastoreError::DuplicateEmail)
        ));
        assert_eq!(repo.store.load().unwrap(), before);
    }

    #[test]
    fn test_email_uniqueness_is_case_sensitive() {
        let (_dir, repo) = test_repo();
        repo.create_user("a@example.com", "hunter2").unwrap();
        // Stored byte-for-byte; a different casing is a different email.
        assert!(repo.create_user("A@example.com", "hunter2").is_ok());
    }

    #[test]
    fn test_authenticate_paths() {
        let (_dir, repo) = test_repo();
        let created = repo.create_user("a@example.com", "hunter2").unwrap();

        let user = repo.authenticate("a@example.com", "hunter2").unwrap();
        assert_eq!(user, created);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));

        assert!(matches!(
            repo.authenticate("a@example.com", "wrong"),
            Err(DatastoreError::Unauthorized)
        ));
        assert!(matches!(
            repo.authenticate("nobody@example.com", "hunter2"),
            Err(DatastoreError::NotFound)
        ));
    }

    #[test]
    fn test_update_user_empty_means_no_change() {
        let (_dir, repo) = test_repo();
        let user = repo.create_user("a@example.com", "hunter2").unwrap();

        let updated = repo.update_user(user.id, "", "", false).unwrap();
        assert_eq!(updated.email, "a@example.com");
        assert!(repo.authenticate("a@example.com", "hunter2").is_ok());

        let updated = repo.update_user(user.id, "b@example.com", "betterpass", false).unwrap();
        assert_eq!(updated.email, "b@example.com");
        assert!(repo.authenticate("b@example.com", "betterpass").is_ok());
        assert!(matches!(
            repo.authenticate("b@example.com", "hunter2"),
            Err(DatastoreError::Unauthorized)
        ));
    }

    #[test]
    fn test_promote_is_one_way() {
        let (_dir, repo) = test_repo();
        let user = repo.create_user("a@example.com", "hunter2").unwrap();
        assert!(!user.is_premium);

        let promoted = repo.update_user(user.id, "", "", true).unwrap();
        assert!(promoted.is_premium);

        // promote=false on a later update does not demote.
        let later = repo.update_user(user.id, "", "", false).unwrap();
        assert!(later.is_premium);
    }

    #[test]
    fn test_update_unknown_user_not_found() {
        let (_dir, repo) = test_repo();
        assert!(matches!(
            repo.update_user(UserId::new(99), "x@example.com", "", false),
            Err(DatastoreError::NotFound)
        ));
    }

    #[test]
    fn test_restart_reproduces_last_written_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let store = Arc::new(SnapshotStore::open(&path));
        store.ensure_exists().unwrap();
        let repo = Repository::new(store.clone());

        let user = repo.create_user("a@example.com", "hunter2").unwrap();
        repo.create_post(user.id, "hello").unwrap();
        let doomed = repo.create_post(user.id, "oops").unwrap();
        repo.delete_post(doomed.id, user.id).unwrap();
        let expected = store.load().unwrap();

        // Fresh store over the same file, as after a process restart.
        let reopened = Repository::new(Arc::new(SnapshotStore::open(&path)));
        assert_eq!(reopened.store.load().unwrap(), expected);
        assert_eq!(reopened.get_post(PostId::new(1)).unwrap().body, "hello");
        assert!(reopened.authenticate("a@example.com", "hunter2").is_ok());
    }
}
