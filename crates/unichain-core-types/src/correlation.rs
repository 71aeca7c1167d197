//! Correlation types for transaction tracking
//!
//! A chaincode invocation is identified by the transaction id the host ledger
//! assigns to the proposal. Local runs (tests, the CLI) mint their own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single transaction proposal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(String);

impl TxId {
    /// Generate a fresh TxId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a transaction id handed over by the host ledger
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TxId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier propagated from the submitting client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation data carried by one chaincode invocation
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub tx_id: TxId,
    pub trace_id: Option<TraceId>,
}

impl InvocationContext {
    /// Create a context with a freshly minted TxId
    pub fn new() -> Self {
        Self {
            tx_id: TxId::new(),
            trace_id: None,
        }
    }

    /// Create a context for a host-assigned transaction id
    pub fn with_tx_id(tx_id: TxId) -> Self {
        Self {
            tx_id,
            trace_id: None,
        }
    }

    /// Attach the client's TraceId
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_id_generation() {
        let id1 = TxId::new();
        let id2 = TxId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_tx_id_display_matches_as_str() {
        let id = TxId::from_string("tx-42".to_string());
        assert_eq!(format!("{}", id), "tx-42");
        assert_eq!(id.as_str(), "tx-42");
    }

    #[test]
    fn test_invocation_context_creation() {
        let ctx = InvocationContext::new();
        assert!(!ctx.tx_id.as_str().is_empty());
        assert!(ctx.trace_id.is_none());
    }

    #[test]
    fn test_invocation_context_with_trace_id() {
        let trace_id = TraceId::new();
        let ctx = InvocationContext::with_tx_id(TxId::from_string("tx-1".to_string()))
            .with_trace_id(trace_id.clone());

        assert_eq!(ctx.tx_id.as_str(), "tx-1");
        assert_eq!(ctx.trace_id, Some(trace_id));
    }

    #[test]
    fn test_serialization() {
        let id = TxId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TxId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
