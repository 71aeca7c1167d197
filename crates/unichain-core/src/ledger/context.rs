use unichain_core_types::{InvocationContext, TraceId, TxId};

use super::stub::ChaincodeStub;

/// Everything one transaction invocation may touch
///
/// The contract receives the world state capability here instead of owning
/// it, so the same contract value serves every invocation.
pub struct TransactionContext<'a> {
    stub: &'a dyn ChaincodeStub,
    invocation: InvocationContext,
}

impl<'a> TransactionContext<'a> {
    /// Context with a freshly minted transaction id
    pub fn new(stub: &'a dyn ChaincodeStub) -> Self {
        Self {
            stub,
            invocation: InvocationContext::new(),
        }
    }

    /// Context for an invocation whose ids were assigned by the host
    pub fn with_invocation(stub: &'a dyn ChaincodeStub, invocation: InvocationContext) -> Self {
        Self { stub, invocation }
    }

    pub fn stub(&self) -> &'a dyn ChaincodeStub {
        self.stub
    }

    pub fn invocation(&self) -> &InvocationContext {
        &self.invocation
    }

    pub fn tx_id(&self) -> &TxId {
        &self.invocation.tx_id
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.invocation.trace_id.as_ref()
    }
}
