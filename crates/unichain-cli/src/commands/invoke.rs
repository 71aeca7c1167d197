//! Submit/evaluate commands
//!
//! Usage: unichain submit <FUNCTION> [ARGS...]
//!        unichain evaluate <FUNCTION> [ARGS...]
//!
//! `--tx-id` stands in for the id a peer would assign; one is minted when absent.

use clap::Args;
use unichain_core::{invoke, InvocationMode, TransactionContext, UniversityContract};
use unichain_core_types::{InvocationContext, TraceId, TxId};
use unichain_store::SqliteStateStore;

use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Transaction function, e.g. createUniversity or UniversityContract:readUniversity
    pub function: String,

    /// Positional transaction arguments
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Transaction id to run under
    #[arg(long)]
    pub tx_id: Option<String>,

    /// Client trace id to correlate with
    #[arg(long)]
    pub trace_id: Option<String>,
}

impl InvokeArgs {
    fn invocation(&self) -> InvocationContext {
        let invocation = match &self.tx_id {
            Some(tx_id) => InvocationContext::with_tx_id(TxId::from_string(tx_id.clone())),
            None => InvocationContext::new(),
        };
        match &self.trace_id {
            Some(trace_id) => invocation.with_trace_id(TraceId::from_string(trace_id.clone())),
            None => invocation,
        }
    }
}

/// Execute one transaction and print its payload
pub async fn execute(
    args: InvokeArgs,
    mode: InvocationMode,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStateStore::open(&config.state_db)?;
    let ctx = TransactionContext::with_invocation(&store, args.invocation());

    let response = invoke(&UniversityContract, &ctx, mode, &args.function, &args.args).await?;

    let payload = response.to_payload()?;
    if !payload.is_empty() {
        println!("{}", String::from_utf8_lossy(&payload));
    }

    Ok(())
}
