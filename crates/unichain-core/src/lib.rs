//! University chaincode - contract core
//!
//! This crate provides everything that runs inside one chaincode invocation:
//! - The `University` record and its world state encoding
//! - `UniversityContract`: existence-checked create/read/update/delete
//! - The dispatch table mapping host function names to transactions
//! - Contract metadata derived from that table
//! - The `ChaincodeStub` world state capability and an in-memory implementation
//! - Error and logging facilities shared with the store and CLI crates
//!
//! Consensus, ordering and endorsement stay with the host ledger; the contract
//! only sees the key-value API of `ChaincodeStub`.

pub mod commands;
pub mod contract;
pub mod dispatch;
pub mod errors;
pub mod ledger;
pub mod logging_facility;
pub mod model;

// Used by the logging macros
#[doc(hidden)]
pub use tracing;
#[doc(hidden)]
pub use unichain_core_types as core_types;

// Re-export commonly used types
pub use commands::Transaction;
pub use contract::{ContractMetadata, UniversityContract};
pub use dispatch::{invoke, InvocationMode, TransactionResponse};
pub use errors::{ContractError, ExError, ExErrorKind, Result};
pub use ledger::{ChaincodeStub, MemoryStub, TransactionContext};
pub use model::University;
