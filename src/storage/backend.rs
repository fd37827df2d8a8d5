// src/storage/backend.rs

use async_trait::async_trait;

use crate::error::AppResult;

/// Namespace every persisted slice is keyed under.
/// The store is the sole writer for keys in this namespace.
pub const PERSIST_NAMESPACE: &str = "root";

/// Durable key-value storage for serialized slice payloads.
///
/// Payloads are opaque JSON text to the backend; shape and versioning are
/// the store's concern. A slice key is its slice name ("auth", "settings")
/// under PERSIST_NAMESPACE.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Store the payload for a slice, replacing any previous value
    async fn put(&self, slice: &str, payload: String) -> AppResult<()>;

    /// Load the payload for a slice, None if never written
    async fn get(&self, slice: &str) -> AppResult<Option<String>>;

    /// Drop the payload for a slice, no-op if absent
    async fn remove(&self, slice: &str) -> AppResult<()>;
}
