// src/store/persistor.rs
//
// Fire-and-forget slice persistence.
//
// One unbounded queue and writer task per whitelisted slice: write-backs
// for a slice land in dispatch order, write-backs for different slices may
// complete in either order. Failures are logged and dropped; the dispatcher
// never sees them.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::storage::StateStorage;

pub const SLICE_AUTH: &str = "auth";
pub const SLICE_SETTINGS: &str = "settings";

/// The persistence whitelist. Cards and analytics are deliberately absent:
/// balances and insights go stale and are refetched every launch.
pub const PERSIST_WHITELIST: &[&str] = &[SLICE_AUTH, SLICE_SETTINGS];

enum WriteRequest {
    Persist(String),
    Flush(oneshot::Sender<()>),
}

pub struct Persistor {
    queues: HashMap<&'static str, mpsc::UnboundedSender<WriteRequest>>,
}

impl Persistor {
    /// Spawn one writer task per whitelisted slice on the ambient runtime.
    /// Tasks exit when the persistor (and with it the senders) drops.
    pub fn spawn(storage: Arc<dyn StateStorage>) -> Self {
        let mut queues = HashMap::new();
        for &slice in PERSIST_WHITELIST {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(write_loop(slice, Arc::clone(&storage), rx));
            queues.insert(slice, tx);
        }
        Self { queues }
    }

    /// Queue a serialized payload for `slice`. No-op (with a warning) for
    /// slices outside the whitelist; the caller filters first, this is the
    /// backstop.
    pub fn enqueue(&self, slice: &str, payload: String) {
        match self.queues.get(slice) {
            Some(tx) => {
                if tx.send(WriteRequest::Persist(payload)).is_err() {
                    log::warn!("Writer task for slice '{}' is gone; write dropped", slice);
                }
            }
            None => {
                log::warn!("Refusing to persist non-whitelisted slice '{}'", slice);
            }
        }
    }

    /// Resolve once every request queued before this call has been applied.
    pub async fn flush(&self) {
        for (slice, tx) in &self.queues {
            let (done_tx, done_rx) = oneshot::channel();
            if tx.send(WriteRequest::Flush(done_tx)).is_ok() {
                if done_rx.await.is_err() {
                    log::warn!("Writer task for slice '{}' exited mid-flush", slice);
                }
            }
        }
    }
}

async fn write_loop(
    slice: &'static str,
    storage: Arc<dyn StateStorage>,
    mut rx: mpsc::UnboundedReceiver<WriteRequest>,
) {
    while let Some(request) = rx.recv().await {
        match request {
            WriteRequest::Persist(payload) => {
                if let Err(e) = storage.put(slice, payload).await {
                    // Durability for this write is lost; in-memory state is
                    // still correct and a later write supersedes this one
                    log::warn!("Write-back for slice '{}' failed: {}", slice, e);
                }
            }
            WriteRequest::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

/// Load and parse the persisted payload for a slice. Any failure - missing
/// row, unreadable storage, payload that no longer parses - yields None so
/// the slice falls back to its compiled-in default.
pub async fn load_slice<T: DeserializeOwned>(
    storage: &dyn StateStorage,
    slice: &str,
) -> Option<T> {
    match storage.get(slice).await {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!(
                    "Persisted payload for slice '{}' no longer parses, using defaults: {}",
                    slice,
                    e
                );
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!(
                "Could not read persisted slice '{}', using defaults: {}",
                slice,
                e
            );
            None
        }
    }
}
