//! unichain store - local world state persistence
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - `SqliteStateStore`, a `ChaincodeStub` backed by a SQLite file, for
//!   running the contract outside a peer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod state;

// Re-export key types
pub use errors::Result;
pub use state::SqliteStateStore;
