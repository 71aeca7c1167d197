use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::stub::ChaincodeStub;
use crate::errors::{ContractError, Result};

#[derive(Debug, Default)]
struct WorldState {
    entries: BTreeMap<String, Vec<u8>>,
    mutations: usize,
}

/// In-memory world state
///
/// Used by tests and by embedders that run the contract without a peer.
/// Counts every put/delete so callers can assert that a failed
/// transaction left the state untouched.
#[derive(Debug, Default)]
pub struct MemoryStub {
    state: Mutex<WorldState>,
}

impl MemoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the contract (test setup)
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.entries.insert(key.into(), value.into());
        }
        self
    }

    /// Raw value currently stored under `key`
    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.entries.get(key).cloned())
    }

    /// All keys in lexical order
    pub fn keys(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of put/delete calls served so far
    pub fn mutation_count(&self) -> usize {
        self.state.lock().map(|state| state.mutations).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, WorldState>> {
        self.state.lock().map_err(|_| ContractError::State {
            message: "in-memory world state lock poisoned".to_string(),
        })
    }
}

#[async_trait]
impl ChaincodeStub for MemoryStub {
    async fn get_state(&self, key: &str) -> Result<Vec<u8>> {
        let state = self.lock()?;
        Ok(state.entries.get(key).cloned().unwrap_or_default())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut state = self.lock()?;
        state.entries.insert(key.to_string(), value);
        state.mutations += 1;
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<()> {
        let mut state = self.lock()?;
        state.entries.remove(key);
        state.mutations += 1;
        Ok(())
    }
}
