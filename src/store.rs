//! Character collection store.
//!
//! This module owns the loading state for the character list screen. A store
//! is constructed in `Loading`, drives exactly one bootstrap fetch, and ends
//! permanently in `Ready` or `Failed`. Observers read a snapshot of the
//! current state or register a listener that is notified synchronously on
//! every transition.

use crate::api::{Api, ApiError, Character};
use log::*;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Boxed future returned by [`FetchCharacters::fetch_characters`].
pub type CharacterFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Character>, ApiError>> + Send + 'a>>;

/// Seam over the remote fetch so the store can be driven by a fake in tests.
///
pub trait FetchCharacters: Send + Sync {
    fn fetch_characters(&self) -> CharacterFuture<'_>;
}

impl FetchCharacters for Api {
    fn fetch_characters(&self) -> CharacterFuture<'_> {
        Box::pin(self.characters())
    }
}

/// Loading progress for the character collection.
///
/// `Ready` with an empty sequence is a confirmed zero-result fetch and is
/// distinct from `Loading`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(Vec<Character>),
    Failed(String),
}

type Listener = Box<dyn Fn(&LoadState) + Send + Sync>;

/// State and listener table behind one lock, so a subscribe can never
/// interleave with a transition.
struct Registry {
    state: LoadState,
    listeners: BTreeMap<u64, Listener>,
    next_listener_id: u64,
}

/// Single authoritative owner of the character list's [`LoadState`] for one
/// screen lifetime.
///
pub struct CharacterStore {
    registry: Arc<Mutex<Registry>>,
    fetcher: Arc<dyn FetchCharacters>,
    started: AtomicBool,
}

/// Handle returned by [`CharacterStore::subscribe`]. Dropping it unregisters
/// the listener.
///
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    /// Unregister the listener now.
    ///
    pub fn cancel(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            registry.listeners.remove(&self.id);
        }
    }
}

impl CharacterStore {
    /// Return a new store in `Loading` for the given fetcher. The state is
    /// observable as `Loading` from the instant of construction, before the
    /// fetch has produced anything.
    ///
    pub fn new(fetcher: Arc<dyn FetchCharacters>) -> CharacterStore {
        CharacterStore {
            registry: Arc::new(Mutex::new(Registry {
                state: LoadState::Loading,
                listeners: BTreeMap::new(),
                next_listener_id: 0,
            })),
            fetcher,
            started: AtomicBool::new(false),
        }
    }

    /// Return a snapshot of the current state.
    ///
    pub fn state(&self) -> LoadState {
        self.lock_registry().state.clone()
    }

    /// Register a change listener. The listener receives the current state
    /// immediately, then every later transition exactly once, in transition
    /// order. Dropping the returned handle unregisters it.
    ///
    /// Listeners run while the store's internal lock is held and must not
    /// call back into the store.
    ///
    pub fn subscribe(
        &self,
        listener: impl Fn(&LoadState) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.lock_registry();
        let id = registry.next_listener_id;
        registry.next_listener_id += 1;
        listener(&registry.state);
        registry.listeners.insert(id, Box::new(listener));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Drive the single bootstrap fetch to its terminal state. Later calls
    /// are no-ops: `Ready` and `Failed` are permanent for this store, and
    /// there is no path back to `Loading`.
    ///
    pub async fn run(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("Ignoring repeat bootstrap request; the fetch already ran.");
            return;
        }

        info!("Fetching characters...");
        match self.fetcher.fetch_characters().await {
            Ok(characters) => {
                info!("Received {} characters.", characters.len());
                self.transition(LoadState::Ready(characters));
            }
            Err(e) => {
                error!("Character fetch failed: {}", e);
                self.transition(LoadState::Failed(format!(
                    "Failed to fetch characters: {}",
                    e
                )));
            }
        }
    }

    fn transition(&self, next: LoadState) {
        let mut registry = self.lock_registry();
        registry.state = next;
        for listener in registry.listeners.values() {
            listener(&registry.state);
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    struct ReadyFetcher(Vec<Character>);

    impl FetchCharacters for ReadyFetcher {
        fn fetch_characters(&self) -> CharacterFuture<'_> {
            let characters = self.0.clone();
            Box::pin(async move { Ok(characters) })
        }
    }

    struct FailingFetcher(String);

    impl FetchCharacters for FailingFetcher {
        fn fetch_characters(&self) -> CharacterFuture<'_> {
            let cause = self.0.clone();
            Box::pin(async move { Err(ApiError::Other(cause)) })
        }
    }

    fn recorder() -> (
        Arc<Mutex<Vec<LoadState>>>,
        impl Fn(&LoadState) + Send + Sync + 'static,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&seen);
        (seen, move |state: &LoadState| {
            writer.lock().unwrap().push(state.clone())
        })
    }

    #[test]
    fn new_store_is_loading() {
        let store = CharacterStore::new(Arc::new(ReadyFetcher(vec![])));
        assert_eq!(store.state(), LoadState::Loading);
    }

    #[tokio::test]
    async fn observer_sees_loading_then_ready_in_order() {
        let characters: Vec<Character> = vec![Faker.fake(), Faker.fake(), Faker.fake()];
        let store = CharacterStore::new(Arc::new(ReadyFetcher(characters.clone())));

        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);
        store.run().await;

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![LoadState::Loading, LoadState::Ready(characters)]
        );
    }

    #[tokio::test]
    async fn empty_fetch_is_ready_not_loading() {
        let store = CharacterStore::new(Arc::new(ReadyFetcher(vec![])));

        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);
        store.run().await;

        assert_eq!(store.state(), LoadState::Ready(vec![]));
        assert_ne!(store.state(), LoadState::Loading);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![LoadState::Loading, LoadState::Ready(vec![])]
        );
    }

    #[tokio::test]
    async fn observer_sees_loading_then_failed_with_cause() {
        let store = CharacterStore::new(Arc::new(FailingFetcher("timeout".to_string())));

        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);
        store.run().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], LoadState::Loading);
        match &seen[1] {
            LoadState::Failed(message) => {
                assert!(message.contains("Failed to fetch characters"));
                assert!(message.contains("timeout"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn every_subscriber_is_notified_exactly_once() {
        let store = CharacterStore::new(Arc::new(ReadyFetcher(vec![Faker.fake()])));

        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let _first_subscription = store.subscribe(first);
        let _second_subscription = store.subscribe(second);
        store.run().await;

        assert_eq!(first_seen.lock().unwrap().len(), 2);
        assert_eq!(second_seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn cancelled_subscription_receives_nothing_further() {
        let store = CharacterStore::new(Arc::new(ReadyFetcher(vec![])));

        let (seen, listener) = recorder();
        let subscription = store.subscribe(listener);
        subscription.cancel();
        store.run().await;

        // Only the replay of the current state at subscribe time
        assert_eq!(*seen.lock().unwrap(), vec![LoadState::Loading]);
    }

    #[tokio::test]
    async fn repeat_run_is_a_no_op() {
        let characters: Vec<Character> = vec![Faker.fake()];
        let store = CharacterStore::new(Arc::new(ReadyFetcher(characters.clone())));

        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);
        store.run().await;
        store.run().await;

        // Exactly one transition: the terminal state is never left
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(store.state(), LoadState::Ready(characters));
    }

    #[tokio::test]
    async fn late_subscriber_sees_the_terminal_state() {
        let characters: Vec<Character> = vec![Faker.fake()];
        let store = CharacterStore::new(Arc::new(ReadyFetcher(characters.clone())));
        store.run().await;

        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![LoadState::Ready(characters)]
        );
    }
}
