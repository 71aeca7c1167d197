//! Contract dispatch table
//!
//! Function names arriving from the host are resolved against a static
//! registration table. Each entry records whether the transaction writes to
//! the ledger (`Submit`) or only reads (`Evaluate`), its parameter names and
//! its return schema; the same table feeds the contract metadata.

use serde::Serialize;

use crate::commands::Transaction;
use crate::contract::{ContractMetadata, UniversityContract};
use crate::errors::{ContractError, Result};
use crate::ledger::TransactionContext;
use crate::model::University;

/// Reserved function name answered with the contract metadata
pub const GET_METADATA: &str = "org.hyperledger.fabric:GetMetadata";

/// Whether a transaction's writes are meant to be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Submit,
    Evaluate,
}

/// Return schema of a registered transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Boolean,
    University,
}

/// How the caller wants the invocation treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Endorse and commit; any registered transaction may run
    Submit,
    /// Query only; submit transactions are refused
    Evaluate,
}

/// One row of the dispatch table
#[derive(Debug)]
pub struct TransactionDescriptor {
    pub name: &'static str,
    pub kind: TransactionKind,
    pub parameters: &'static [&'static str],
    pub returns: Option<ReturnType>,
    bind: fn(&[String]) -> Option<Transaction>,
}

impl TransactionDescriptor {
    /// Bind positional arguments to this transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` on an arity mismatch.
    pub fn bind(&self, args: &[String]) -> Result<Transaction> {
        (self.bind)(args).ok_or_else(|| ContractError::InvalidArguments {
            transaction: self.name.to_string(),
            expected: self.parameters.len(),
            actual: args.len(),
        })
    }
}

pub static TRANSACTIONS: &[TransactionDescriptor] = &[
    TransactionDescriptor {
        name: "universityExists",
        kind: TransactionKind::Evaluate,
        parameters: &["cnpj"],
        returns: Some(ReturnType::Boolean),
        bind: bind_exists,
    },
    TransactionDescriptor {
        name: "createUniversity",
        kind: TransactionKind::Submit,
        parameters: &["cnpj", "universityName"],
        returns: None,
        bind: bind_create,
    },
    TransactionDescriptor {
        name: "readUniversity",
        kind: TransactionKind::Evaluate,
        parameters: &["cnpj"],
        returns: Some(ReturnType::University),
        bind: bind_read,
    },
    TransactionDescriptor {
        name: "updateUniversity",
        kind: TransactionKind::Submit,
        parameters: &["cnpj", "universityName"],
        returns: None,
        bind: bind_update,
    },
    TransactionDescriptor {
        name: "deleteUniversity",
        kind: TransactionKind::Submit,
        parameters: &["cnpj"],
        returns: None,
        bind: bind_delete,
    },
];

fn bind_exists(args: &[String]) -> Option<Transaction> {
    match args {
        [cnpj] => Some(Transaction::UniversityExists { cnpj: cnpj.clone() }),
        _ => None,
    }
}

fn bind_create(args: &[String]) -> Option<Transaction> {
    match args {
        [cnpj, name] => Some(Transaction::CreateUniversity {
            cnpj: cnpj.clone(),
            university_name: name.clone(),
        }),
        _ => None,
    }
}

fn bind_read(args: &[String]) -> Option<Transaction> {
    match args {
        [cnpj] => Some(Transaction::ReadUniversity { cnpj: cnpj.clone() }),
        _ => None,
    }
}

fn bind_update(args: &[String]) -> Option<Transaction> {
    match args {
        [cnpj, name] => Some(Transaction::UpdateUniversity {
            cnpj: cnpj.clone(),
            university_name: name.clone(),
        }),
        _ => None,
    }
}

fn bind_delete(args: &[String]) -> Option<Transaction> {
    match args {
        [cnpj] => Some(Transaction::DeleteUniversity { cnpj: cnpj.clone() }),
        _ => None,
    }
}

/// Find the table entry for `function`
///
/// Accepts both the bare name and the `UniversityContract:<name>` form.
///
/// # Errors
///
/// Returns `UnknownTransaction` if no entry matches.
pub fn resolve(function: &str) -> Result<&'static TransactionDescriptor> {
    let name = match function.split_once(':') {
        Some((contract, name)) if contract == UniversityContract::NAME => name,
        _ => function,
    };

    TRANSACTIONS
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| ContractError::UnknownTransaction {
            name: function.to_string(),
        })
}

impl Transaction {
    /// Resolve `function` and bind `args` in one step
    ///
    /// # Errors
    ///
    /// `UnknownTransaction` or `InvalidArguments`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self> {
        resolve(function)?.bind(args)
    }
}

/// What an invocation hands back to the client
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionResponse {
    Exists(bool),
    University(University),
    Metadata(Box<ContractMetadata>),
    Empty,
}

impl TransactionResponse {
    /// Encode the response payload
    ///
    /// Booleans render as `true`/`false`, records and metadata as JSON, and
    /// write transactions as an empty payload.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if JSON encoding fails.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        match self {
            TransactionResponse::Exists(exists) => Ok(exists.to_string().into_bytes()),
            TransactionResponse::University(university) => university.to_state_bytes(),
            TransactionResponse::Metadata(metadata) => Ok(serde_json::to_vec(metadata)?),
            TransactionResponse::Empty => Ok(Vec::new()),
        }
    }
}

/// Run one invocation end to end
///
/// # Errors
///
/// Dispatch errors (`UnknownTransaction`, `InvalidArguments`,
/// `SubmitRequired`) are raised before the world state is touched; otherwise
/// the contract operation's own errors are returned.
pub async fn invoke(
    contract: &UniversityContract,
    ctx: &TransactionContext<'_>,
    mode: InvocationMode,
    function: &str,
    args: &[String],
) -> Result<TransactionResponse> {
    if function == GET_METADATA {
        return Ok(TransactionResponse::Metadata(Box::new(
            ContractMetadata::describe(),
        )));
    }

    let descriptor = resolve(function)?;
    if mode == InvocationMode::Evaluate && descriptor.kind == TransactionKind::Submit {
        return Err(ContractError::SubmitRequired {
            transaction: descriptor.name.to_string(),
        });
    }

    let transaction = descriptor.bind(args)?;
    tracing::debug!(
        transaction = descriptor.name,
        mode = ?mode,
        tx_id = ctx.tx_id().as_str(),
        "dispatching transaction"
    );
    execute(contract, ctx, transaction).await
}

/// Execute an already bound transaction
///
/// # Errors
///
/// Whatever the underlying contract operation returns.
pub async fn execute(
    contract: &UniversityContract,
    ctx: &TransactionContext<'_>,
    transaction: Transaction,
) -> Result<TransactionResponse> {
    match transaction {
        Transaction::UniversityExists { cnpj } => contract
            .university_exists(ctx, &cnpj)
            .await
            .map(TransactionResponse::Exists),
        Transaction::CreateUniversity {
            cnpj,
            university_name,
        } => {
            contract
                .create_university(ctx, &cnpj, &university_name)
                .await?;
            Ok(TransactionResponse::Empty)
        }
        Transaction::ReadUniversity { cnpj } => contract
            .read_university(ctx, &cnpj)
            .await
            .map(TransactionResponse::University),
        Transaction::UpdateUniversity {
            cnpj,
            university_name,
        } => {
            contract
                .update_university(ctx, &cnpj, &university_name)
                .await?;
            Ok(TransactionResponse::Empty)
        }
        Transaction::DeleteUniversity { cnpj } => {
            contract.delete_university(ctx, &cnpj).await?;
            Ok(TransactionResponse::Empty)
        }
    }
}
