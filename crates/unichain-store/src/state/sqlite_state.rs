//! SQLite-backed world state
//!
//! Stands in for a peer's state database when the contract runs locally.
//! Every `ChaincodeStub` call is one statement; the connection mutex is held
//! for that statement only and never across an await point.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use unichain_core::errors::{ExError, ExErrorKind};
use unichain_core::{ChaincodeStub, Result as ContractResult};

use crate::db;
use crate::errors::{from_rusqlite, state_error, Result};
use crate::migrations::apply_migrations;

pub struct SqliteStateStore {
    conn: Mutex<Connection>,
}

impl SqliteStateStore {
    /// Open (or create) a world state file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Open a throwaway in-memory world state
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, configuring it and applying migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Number of keys currently stored
    pub fn key_count(&self) -> Result<i64> {
        self.with_conn("key_count", |conn| {
            conn.query_row("SELECT COUNT(*) FROM world_state", [], |row| row.get(0))
        })
    }

    fn with_conn<T>(
        &self,
        op: &str,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        let conn = self.conn.lock().map_err(|_| {
            ExError::new(ExErrorKind::Internal)
                .with_op(op.to_string())
                .with_message("world state connection lock poisoned")
        })?;
        f(&conn).map_err(|e| from_rusqlite(e).with_op(op.to_string()))
    }
}

#[async_trait]
impl ChaincodeStub for SqliteStateStore {
    async fn get_state(&self, key: &str) -> ContractResult<Vec<u8>> {
        let value: Option<Vec<u8>> = self
            .with_conn("get_state", |conn| {
                conn.query_row(
                    "SELECT value FROM world_state WHERE key = ?1",
                    [key],
                    |row| row.get(0),
                )
                .optional()
            })
            .map_err(state_error)?;

        tracing::debug!(
            state_key = key,
            value_len = value.as_ref().map_or(0, Vec::len),
            "get_state"
        );
        Ok(value.unwrap_or_default())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> ContractResult<()> {
        let value_len = value.len();
        let now = chrono::Utc::now().timestamp();
        self.with_conn("put_state", |conn| {
            conn.execute(
                "INSERT INTO world_state (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                rusqlite::params![key, value, now],
            )
        })
        .map_err(state_error)?;

        tracing::debug!(state_key = key, value_len, "put_state");
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> ContractResult<()> {
        let removed = self
            .with_conn("delete_state", |conn| {
                conn.execute("DELETE FROM world_state WHERE key = ?1", [key])
            })
            .map_err(state_error)?;

        tracing::debug!(state_key = key, removed, "delete_state");
        Ok(())
    }
}
