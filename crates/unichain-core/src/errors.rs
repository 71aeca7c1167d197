use thiserror::Error;
use unichain_core_types::{InvocationContext, TraceId, TxId};

/// Result type alias using ContractError
pub type Result<T> = std::result::Result<T, ContractError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that clients of the chaincode can
/// match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Precondition
    AlreadyExists,
    NotFound,

    // Invocation
    UnknownTransaction,
    InvalidInput,
    SubmitRequired,

    // Integration/IO
    Serialization,
    Persistence,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownTransaction => "ERR_UNKNOWN_TRANSACTION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::SubmitRequired => "ERR_SUBMIT_REQUIRED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification plus whatever context the failing layer
/// knew about: the operation, the record key and the invocation ids.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    tx_id: Option<TxId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            tx_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record key context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add transaction id context
    pub fn with_tx_id(mut self, tx_id: TxId) -> Self {
        self.tx_id = Some(tx_id);
        self
    }

    /// Add trace id context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add both ids of an invocation
    pub fn with_invocation(self, invocation: &InvocationContext) -> Self {
        let err = self.with_tx_id(invocation.tx_id.clone());
        match &invocation.trace_id {
            Some(trace_id) => err.with_trace_id(trace_id.clone()),
            None => err,
        }
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn tx_id(&self) -> Option<&TxId> {
        self.tx_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(tx_id) = &self.tx_id {
            write!(f, " (tx_id: {})", tx_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for contract invocations
///
/// The messages of the two precondition variants are what the submitting
/// client sees verbatim, so they stay stable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// create on a key that is already present
    #[error("The university {cnpj} already exists")]
    UniversityAlreadyExists { cnpj: String },

    /// read/update/delete on an absent key
    #[error("The university {cnpj} does not exist")]
    UniversityNotFound { cnpj: String },

    /// Function name not present in the dispatch table
    #[error("You've asked to invoke a function that does not exist: {name}")]
    UnknownTransaction { name: String },

    /// Wrong number of arguments for a registered transaction
    #[error("Expected {expected} parameters for {transaction}, but {actual} have been supplied")]
    InvalidArguments {
        transaction: String,
        expected: usize,
        actual: usize,
    },

    /// A submit transaction was invoked for evaluation only
    #[error("Transaction {transaction} writes to the ledger and must be submitted")]
    SubmitRequired { transaction: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The host world state failed to serve a request
    #[error("World state error: {message}")]
    State { message: String },
}

impl From<ContractError> for ExError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::UniversityAlreadyExists { cnpj } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_message(format!("The university {} already exists", cnpj))
                    .with_entity_id(cnpj)
            }

            ContractError::UniversityNotFound { cnpj } => ExError::new(ExErrorKind::NotFound)
                .with_message(format!("The university {} does not exist", cnpj))
                .with_entity_id(cnpj),

            ContractError::UnknownTransaction { name } => {
                ExError::new(ExErrorKind::UnknownTransaction)
                    .with_op("dispatch")
                    .with_message(format!("Unknown transaction: {}", name))
            }

            ContractError::InvalidArguments {
                transaction,
                expected,
                actual,
            } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(transaction)
                .with_message(format!(
                    "Expected {} parameters, but {} have been supplied",
                    expected, actual
                )),

            ContractError::SubmitRequired { transaction } => {
                ExError::new(ExErrorKind::SubmitRequired)
                    .with_op(transaction)
                    .with_message("Submit transaction invoked in evaluate mode")
            }

            ContractError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ContractError::State { message } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ContractError
impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        ContractError::Serialization {
            message: err.to_string(),
        }
    }
}
