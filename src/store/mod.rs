// src/store/mod.rs
//
// Application Store - composes the slice reducers into one state tree.
//
// DESIGN PRINCIPLES:
// 1. Synchronous dispatch - reducers and subscriber notification complete
//    before dispatch returns
// 2. Deterministic - same state + same action -> same next state
// 3. Immutable snapshots - consumers get clones, mutation only via dispatch
// 4. Fire-and-forget persistence - disk I/O never blocks dispatch

pub mod persistor;


use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use serde::{Deserialize, Serialize};

use crate::state::{analytics, auth, cards, settings, Action};
use crate::state::{AnalyticsState, AuthState, CardsState, SettingsState};
use crate::storage::StateStorage;
use self::persistor::{load_slice, Persistor, SLICE_AUTH, SLICE_SETTINGS};

/// The whole-state tree: one field per slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub auth: AuthState,
    pub cards: CardsState,
    pub analytics: AnalyticsState,
    pub settings: SettingsState,
}

/// Root reducer: routes the action to every slice reducer. Each reducer
/// ignores actions addressed to other slices.
fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        auth: auth::reduce(&state.auth, action),
        cards: cards::reduce(&state.cards, action),
        analytics: analytics::reduce(&state.analytics, action),
        settings: settings::reduce(&state.settings, action),
    }
}

/// Store lifecycle. Dispatch is accepted in every phase; `Ready` is
/// terminal for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Created,
    Rehydrating,
    Ready,
}

type Listener = Box<dyn Fn() + Send + Sync>;
type SubscriberList = Mutex<Vec<(u64, Listener)>>;

/// Scoped deregistration handle returned by `Store::subscribe`.
/// Dropping it (or calling `unsubscribe`) removes the listener; once either
/// returns, the listener is never invoked again.
pub struct Subscription {
    id: u64,
    subscribers: Weak<SubscriberList>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}

/// The application store.
///
/// Constructed explicitly at process start and handed to every consumer;
/// tests build isolated instances against their own storage. Requires a
/// tokio runtime: persistence write-backs run as background tasks.
pub struct Store {
    state: RwLock<AppState>,
    subscribers: Arc<SubscriberList>,
    next_subscriber_id: AtomicU64,
    phase: RwLock<StorePhase>,
    persistor: Persistor,
    storage: Arc<dyn StateStorage>,
}

impl Store {
    /// Create a store with compiled-in default state.
    /// Spawns one persistence writer task per whitelisted slice.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            state: RwLock::new(AppState::default()),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscriber_id: AtomicU64::new(1),
            phase: RwLock::new(StorePhase::Created),
            persistor: Persistor::spawn(Arc::clone(&storage)),
            storage,
        }
    }

    /// Current whole-state snapshot. The clone is yours; mutating it has no
    /// effect on the store.
    pub fn get_state(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    pub fn phase(&self) -> StorePhase {
        *self.phase.read().unwrap()
    }

    /// Apply `action` through every slice reducer, notify subscribers
    /// exactly once, then enqueue write-backs for whitelisted slices that
    /// changed. Synchronous: returns after reducers and notifications have
    /// completed; persistence happens in the background.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let (previous, next) = {
            let mut state = self.state.write().unwrap();
            let previous = state.clone();
            let next = reduce(&previous, &action);
            *state = next.clone();
            (previous, next)
        };

        log::debug!("dispatched {:?}", action);
        self.notify_subscribers();
        self.persist_changed(&previous, &next);
    }

    /// Register a listener invoked (with no arguments) after every dispatch
    /// and once when rehydration completes. Listeners re-read state via
    /// `get_state`.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .lock()
            .unwrap()
            .push((id, Box::new(listener)));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Load persisted values for whitelisted slices and replace the
    /// in-memory defaults, then signal completion through the subscriber
    /// list. Absent or unreadable payloads leave the slice at its default;
    /// defaults are always safe, so recovery beats failure here.
    ///
    /// Dispatch is accepted while this runs. A dispatch that mutates a
    /// whitelisted slice before rehydration completes is overwritten when
    /// the persisted value lands; callers that care should await this
    /// before dispatching.
    pub async fn rehydrate(&self) {
        *self.phase.write().unwrap() = StorePhase::Rehydrating;

        let auth: Option<AuthState> = load_slice(self.storage.as_ref(), SLICE_AUTH).await;
        let settings: Option<SettingsState> =
            load_slice(self.storage.as_ref(), SLICE_SETTINGS).await;

        {
            let mut state = self.state.write().unwrap();
            if let Some(auth) = auth {
                state.auth = auth;
            }
            if let Some(settings) = settings {
                state.settings = settings;
            }
        }

        *self.phase.write().unwrap() = StorePhase::Ready;
        log::debug!("rehydration complete");
        self.notify_subscribers();
    }

    /// Explicitly bypass rehydration: mark the store ready with compiled-in
    /// defaults and emit the ready signal.
    pub fn skip_rehydration(&self) {
        *self.phase.write().unwrap() = StorePhase::Ready;
        self.notify_subscribers();
    }

    /// Wait for every queued write-back to reach storage. Shutdown and
    /// test hook; dispatch never needs it.
    pub async fn flush(&self) {
        self.persistor.flush().await;
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.lock().unwrap();
        for (id, listener) in subscribers.iter() {
            // A panicking listener must not starve the others
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                listener();
            }));
            if result.is_err() {
                log::warn!("Subscriber {} panicked during notification", id);
            }
        }
    }

    /// Enqueue a write-back for each whitelisted slice whose value changed.
    /// Serialization failures are logged and dropped: in-memory state stays
    /// correct, only durability for that write is lost.
    fn persist_changed(&self, previous: &AppState, next: &AppState) {
        if previous.auth != next.auth {
            match serde_json::to_string(&next.auth) {
                Ok(payload) => self.persistor.enqueue(SLICE_AUTH, payload),
                Err(e) => log::warn!("Could not serialize auth slice: {}", e),
            }
        }
        if previous.settings != next.settings {
            match serde_json::to_string(&next.settings) {
                Ok(payload) => self.persistor.enqueue(SLICE_SETTINGS, payload),
                Err(e) => log::warn!("Could not serialize settings slice: {}", e),
            }
        }
    }
}
