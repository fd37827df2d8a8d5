// src/storage/sqlite.rs
//
// Durable slice storage over the shared sqlite database.
// Blocking rusqlite calls run on the blocking pool so the async dispatch
// path never waits on disk.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::task;

use super::backend::{StateStorage, PERSIST_NAMESPACE};
use crate::db::{
    create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool,
};
use crate::error::AppResult;

pub struct SqliteStateStorage {
    pool: Arc<ConnectionPool>,
}

impl SqliteStateStorage {
    /// Open (or create) the database at the default app data location
    pub fn open() -> AppResult<Self> {
        let pool = create_connection_pool()?;
        Self::with_pool(Arc::new(pool))
    }

    /// Open (or create) the database at an explicit path (tests)
    pub fn open_at(db_path: &Path) -> AppResult<Self> {
        let pool = create_connection_pool_at(db_path)?;
        Self::with_pool(Arc::new(pool))
    }

    /// Wrap an existing pool, initializing the schema (idempotent)
    pub fn with_pool(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        {
            let conn = pool.get()?;
            initialize_database(&conn)?;
        }
        Ok(Self { pool })
    }
}

#[async_trait]
impl StateStorage for SqliteStateStorage {
    async fn put(&self, slice: &str, payload: String) -> AppResult<()> {
        let pool = Arc::clone(&self.pool);
        let slice = slice.to_string();
        task::spawn_blocking(move || -> AppResult<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT OR REPLACE INTO persisted_state (namespace, slice, payload, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    PERSIST_NAMESPACE,
                    slice,
                    payload,
                    Utc::now().to_rfc3339()
                ],
            )?;
            Ok(())
        })
        .await?
    }

    async fn get(&self, slice: &str) -> AppResult<Option<String>> {
        let pool = Arc::clone(&self.pool);
        let slice = slice.to_string();
        task::spawn_blocking(move || -> AppResult<Option<String>> {
            let conn = pool.get()?;
            let payload = conn
                .query_row(
                    "SELECT payload FROM persisted_state WHERE namespace = ?1 AND slice = ?2",
                    params![PERSIST_NAMESPACE, slice],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(payload)
        })
        .await?
    }

    async fn remove(&self, slice: &str) -> AppResult<()> {
        let pool = Arc::clone(&self.pool);
        let slice = slice.to_string();
        task::spawn_blocking(move || -> AppResult<()> {
            let conn = pool.get()?;
            conn.execute(
                "DELETE FROM persisted_state WHERE namespace = ?1 AND slice = ?2",
                params![PERSIST_NAMESPACE, slice],
            )?;
            Ok(())
        })
        .await?
    }
}
