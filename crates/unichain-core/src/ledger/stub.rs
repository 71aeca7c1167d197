use async_trait::async_trait;

use crate::errors::Result;

/// Per-transaction world state API exposed by the host ledger
///
/// Values are opaque bytes. An absent key reads back as an empty value.
/// Implementations report host failures as `ContractError::State`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChaincodeStub: Send + Sync {
    /// Read the value stored under `key`, or an empty value if absent
    async fn get_state(&self, key: &str) -> Result<Vec<u8>>;

    /// Upsert `value` under `key`
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove `key`; removing an absent key is a no-op
    async fn delete_state(&self, key: &str) -> Result<()>;
}
