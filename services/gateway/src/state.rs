use crate::metrics::HitCounter;
use datastore::{Repository, RevocationLedger, SnapshotStore};
use std::sync::Arc;
use tokens::TokenKeeper;

#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub ledger: RevocationLedger,
    pub tokens: Arc<TokenKeeper>,
    pub hits: Arc<HitCounter>,
    pub api_key: Arc<str>,
}

impl AppState {
    /// Wire the shared store into the repository and ledger; both talk
    /// to the same file through the same lock.
    pub fn new(store: Arc<SnapshotStore>, keeper: TokenKeeper, api_key: &str) -> Self {
        Self {
            repo: Repository::new(Arc::clone(&store)),
            ledger: RevocationLedger::new(store),
            tokens: Arc::new(keeper),
            hits: Arc::new(HitCounter::new()),
            api_key: Arc::from(api_key),
        }
    }
}
