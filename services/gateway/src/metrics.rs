//! Request-count metrics for the static file server

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime hit counter, resettable by the admin endpoint.
#[derive(Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

pub async fn track_hits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.hits.hit();
    next.run(request).await
}
