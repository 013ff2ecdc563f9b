use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use futures::channel::mpsc;

use crate::adapter::{DocumentStore, FeedGuard, ResponseFeed};
use crate::error::StoreError;
use crate::models::{NewResponse, Profile, ResponseDoc};

/// In-memory DocumentStore for testing and native fallback.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    profiles: HashMap<String, Profile>,
    responses: Vec<ResponseDoc>,
    subscribers: HashMap<u64, mpsc::UnboundedSender<Vec<ResponseDoc>>>,
    next_subscriber: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared instance, so every screen sees the same data
    /// when running without a backend.
    pub fn shared() -> MemoryStore {
        static SHARED: OnceLock<MemoryStore> = OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}

impl DocumentStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.inner.lock().unwrap().profiles.get(user_id).cloned())
    }

    async fn put_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.inner
            .lock()
            .unwrap()
            .profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn append_response(&self, response: NewResponse) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.responses.push(ResponseDoc {
            user_id: response.user_id,
            email: response.email,
            area: response.area,
            answers: response.answers,
            submitted_at: current_timestamp(),
        });
        let snapshot = inner.responses.clone();
        // Drop subscribers whose feed has gone away.
        inner
            .subscribers
            .retain(|_, tx| tx.unbounded_send(snapshot.clone()).is_ok());
        Ok(())
    }

    async fn subscribe_responses(&self) -> Result<ResponseFeed, StoreError> {
        let (tx, rx) = mpsc::unbounded();
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_subscriber;
            inner.next_subscriber += 1;
            // First delivery is the current full set.
            let _ = tx.unbounded_send(inner.responses.clone());
            inner.subscribers.insert(id, tx);
            id
        };
        let registry = Arc::clone(&self.inner);
        let guard = FeedGuard::new(move || {
            registry.lock().unwrap().subscribers.remove(&id);
        });
        Ok(ResponseFeed::new(rx, guard))
    }
}

/// Platform-aware wall clock, epoch seconds.
pub(crate) fn current_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions_for;
    use crate::forms::{blank_fields, collect_answers};
    use crate::models::Area;

    fn response_for(area: Area) -> NewResponse {
        let questions = questions_for(area);
        NewResponse {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            area,
            answers: collect_answers(questions, &blank_fields(questions)),
        }
    }

    #[tokio::test]
    async fn test_profile_is_overwritten_not_merged() {
        let store = MemoryStore::new();

        assert_eq!(store.get_profile("u1").await.unwrap(), None);

        let first = Profile {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            area: Some(Area::Student),
        };
        store.put_profile(&first).await.unwrap();
        assert_eq!(store.get_profile("u1").await.unwrap(), Some(first));

        let second = Profile {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            area: Some(Area::Freelancer),
        };
        store.put_profile(&second).await.unwrap();
        assert_eq!(store.get_profile("u1").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_append_keeps_every_response() {
        let store = MemoryStore::new();

        store.append_response(response_for(Area::Student)).await.unwrap();
        store.append_response(response_for(Area::Student)).await.unwrap();
        store.append_response(response_for(Area::Creator)).await.unwrap();

        let mut feed = store.subscribe_responses().await.unwrap();
        let snapshot = feed.next().await.unwrap();
        assert_eq!(snapshot.len(), 3);
        assert!(snapshot.iter().all(|r| r.submitted_at > 0));
    }

    #[tokio::test]
    async fn test_subscription_delivers_current_set_then_full_set_per_insert() {
        let store = MemoryStore::new();
        store.append_response(response_for(Area::Student)).await.unwrap();

        let mut feed = store.subscribe_responses().await.unwrap();
        assert_eq!(feed.next().await.unwrap().len(), 1);

        store.append_response(response_for(Area::Creator)).await.unwrap();
        let snapshot = feed.next().await.unwrap();
        // Full set, not a delta.
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_feed_is_unregistered_before_resubscription() {
        let store = MemoryStore::new();

        let mut first = store.subscribe_responses().await.unwrap();
        assert_eq!(first.next().await.unwrap().len(), 0);
        drop(first);

        let mut second = store.subscribe_responses().await.unwrap();
        assert_eq!(second.next().await.unwrap().len(), 0);

        store.append_response(response_for(Area::Personal)).await.unwrap();

        // Exactly one delivery for the insert; a leaked first listener
        // would not change this feed, but the registry must hold only
        // the live one.
        assert_eq!(second.next().await.unwrap().len(), 1);
        assert_eq!(store.inner.lock().unwrap().subscribers.len(), 1);
    }
}
