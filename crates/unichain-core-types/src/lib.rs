//! Core types shared across the unichain crates
//!
//! This crate holds the small vocabulary used by both the error facility and
//! the logging facility:
//!
//! - **Correlation types**: TxId, TraceId, InvocationContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{InvocationContext, TraceId, TxId};
