//! # Document store adapter
//!
//! [`DocumentStore`] is the seam between the screens and whatever holds
//! the documents. All reads and writes go through this trait, so the same
//! screen logic works against the in-memory store ([`crate::MemoryStore`],
//! used by tests and the native fallback) or the remote store backed by
//! server functions.
//!
//! The trait covers the three collections the application touches:
//!
//! - the per-user profile document (point get/put, full overwrite),
//! - the append-only response collection,
//! - a live subscription over that collection. The subscription always
//!   delivers the **full current set** — once immediately on subscribe and
//!   again after every insert, never a delta — so consumers recompute from
//!   an authoritative snapshot and network reordering cannot matter.

use futures::channel::mpsc;
use futures::StreamExt;

use crate::error::StoreError;
use crate::models::{NewResponse, Profile, ResponseDoc};

/// Async interface over the backing document store.
pub trait DocumentStore {
    /// Point read of the profile document for `user_id`.
    fn get_profile(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Profile>, StoreError>>;

    /// Full overwrite of the profile document at its key. Idempotent.
    fn put_profile(
        &self,
        profile: &Profile,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Insert one response; the store assigns id and timestamp.
    fn append_response(
        &self,
        response: NewResponse,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Open a live feed over the response collection.
    fn subscribe_responses(
        &self,
    ) -> impl std::future::Future<Output = Result<ResponseFeed, StoreError>>;
}

/// A live feed of full response-set snapshots.
///
/// Dropping the feed releases the underlying listener exactly once, so a
/// screen that subscribes on entry and drops on exit can never stack up
/// duplicate listeners across re-entries.
pub struct ResponseFeed {
    rx: mpsc::UnboundedReceiver<Vec<ResponseDoc>>,
    _guard: FeedGuard,
}

impl ResponseFeed {
    pub fn new(rx: mpsc::UnboundedReceiver<Vec<ResponseDoc>>, guard: FeedGuard) -> Self {
        Self { rx, _guard: guard }
    }

    /// Next full snapshot, or `None` once the feed is closed.
    pub async fn next(&mut self) -> Option<Vec<ResponseDoc>> {
        self.rx.next().await
    }
}

/// Runs its release action when dropped, at most once.
pub struct FeedGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl FeedGuard {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for FeedGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
