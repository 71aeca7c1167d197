//! Access to the host ledger's world state
//!
//! The contract only ever sees the narrow key-value capability defined by
//! [`ChaincodeStub`], reached through a [`TransactionContext`].

pub mod context;
pub mod memory;
pub mod stub;

pub use context::TransactionContext;
pub use memory::MemoryStub;
pub use stub::ChaincodeStub;

#[cfg(test)]
pub use stub::MockChaincodeStub;
