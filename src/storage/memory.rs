// src/storage/memory.rs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::StateStorage;
use crate::error::AppResult;

/// In-memory backend. Nothing survives the process; useful for tests and
/// for running the store with persistence effectively disabled.
#[derive(Default)]
pub struct MemoryStateStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slice payload, as if a previous session had written it
    pub fn seed(&self, slice: &str, payload: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(slice.to_string(), payload.to_string());
    }

    /// Snapshot of everything currently stored (test inspection)
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.read().unwrap().clone()
    }
}

#[async_trait]
impl StateStorage for MemoryStateStorage {
    async fn put(&self, slice: &str, payload: String) -> AppResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(slice.to_string(), payload);
        Ok(())
    }

    async fn get(&self, slice: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().unwrap().get(slice).cloned())
    }

    async fn remove(&self, slice: &str) -> AppResult<()> {
        self.entries.write().unwrap().remove(slice);
        Ok(())
    }
}
