//! Platform-appropriate document store constructor.
//!
//! Returns the [`store::DocumentStore`] the screens talk to:
//! - **Web** (WASM + `web` feature): [`RemoteStore`], which forwards to
//!   the `api` server functions and long-polls the response feed.
//! - **Native** (tests, local runs without a backend): the process-wide
//!   shared [`store::MemoryStore`].

use store::DocumentStore;

/// Create the platform-appropriate document store.
pub fn make_store() -> impl DocumentStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        RemoteStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::shared()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use remote_impl::RemoteStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod remote_impl {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use dioxus::prelude::spawn;
    use futures::channel::mpsc;

    use store::{
        DocumentStore, FeedGuard, NewResponse, Profile, ResponseFeed, StoreError,
    };

    /// Document store backed by the server functions in `api`.
    ///
    /// All operations are scoped to the signed-in session on the server
    /// side; the profile key argument is carried by the session cookie
    /// rather than the call.
    #[derive(Clone, Copy, Default)]
    pub struct RemoteStore;

    impl RemoteStore {
        pub fn new() -> Self {
            Self
        }
    }

    impl DocumentStore for RemoteStore {
        async fn get_profile(&self, _user_id: &str) -> Result<Option<Profile>, StoreError> {
            api::get_profile()
                .await
                .map_err(|e| StoreError(e.to_string()))
        }

        async fn put_profile(&self, profile: &Profile) -> Result<(), StoreError> {
            let tag = profile
                .area
                .map(|a| a.tag().to_string())
                .unwrap_or_default();
            api::save_profile(tag)
                .await
                .map(|_| ())
                .map_err(|e| StoreError(e.to_string()))
        }

        async fn append_response(&self, response: NewResponse) -> Result<(), StoreError> {
            api::submit_response(response.area.tag().to_string(), response.answers)
                .await
                .map_err(|e| StoreError(e.to_string()))
        }

        async fn subscribe_responses(&self) -> Result<ResponseFeed, StoreError> {
            let (tx, rx) = mpsc::unbounded();
            let stop = Arc::new(AtomicBool::new(false));

            let stop_poll = Arc::clone(&stop);
            spawn(async move {
                // A first poll from the far future returns the current
                // set immediately; afterwards each poll parks server-side
                // until the insert sequence moves.
                let mut since = u64::MAX;
                let mut delivered_first = false;
                loop {
                    if stop_poll.load(Ordering::Relaxed) {
                        break;
                    }
                    match api::poll_responses(since).await {
                        Ok(batch) => {
                            // Long-poll timeouts return an unchanged
                            // sequence; forward only real changes.
                            if delivered_first && batch.seq == since {
                                continue;
                            }
                            since = batch.seq;
                            delivered_first = true;
                            if tx.unbounded_send(batch.responses).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            // Surfaced once by the closed feed; no retry.
                            tracing::error!("response feed poll failed: {}", e);
                            break;
                        }
                    }
                }
            });

            let guard = FeedGuard::new(move || stop.store(true, Ordering::Relaxed));
            Ok(ResponseFeed::new(rx, guard))
        }
    }
}
