//! The University contract
//!
//! Existence-checked CRUD over records keyed by `cnpj`. Each operation checks
//! its precondition first and then performs at most one world state mutation,
//! so a failed invocation never leaves a partial write behind.
//!
//! ## Logging Ownership
//!
//! The public operations own lifecycle logging (`start`, then `end` or
//! `end_error`). Internal helpers log nothing, so `create_university` does not
//! emit a nested `university_exists` lifecycle.

use std::time::Instant;

use unichain_core_types::TraceId;

use crate::errors::{ContractError, ExError, Result};
use crate::ledger::TransactionContext;
use crate::model::University;
use crate::{log_op_end, log_op_error, log_op_start};

/// Stateless contract; the world state arrives with each `TransactionContext`
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversityContract;

impl UniversityContract {
    /// Name under which the contract is registered with the host
    pub const NAME: &'static str = "UniversityContract";

    pub fn new() -> Self {
        Self
    }

    /// Whether a non-empty value is stored under `cnpj`
    ///
    /// # Errors
    ///
    /// Only host world state failures (`State`); never a domain error.
    pub async fn university_exists(&self, ctx: &TransactionContext<'_>, cnpj: &str) -> Result<bool> {
        log_op_start!(
            "university_exists",
            cnpj = cnpj,
            tx_id = ctx.tx_id().as_str(),
            trace_id = ctx.trace_id().map(TraceId::as_str)
        );
        let start = Instant::now();
        let result = exists_in_state(ctx, cnpj).await;
        finish(ctx, "university_exists", cnpj, start, result)
    }

    /// Create a new record
    ///
    /// # Errors
    ///
    /// * `UniversityAlreadyExists` - a record is already stored under `cnpj`
    /// * `Serialization` / `State` - encoding or host failures
    pub async fn create_university(
        &self,
        ctx: &TransactionContext<'_>,
        cnpj: &str,
        university_name: &str,
    ) -> Result<()> {
        log_op_start!(
            "create_university",
            cnpj = cnpj,
            tx_id = ctx.tx_id().as_str(),
            trace_id = ctx.trace_id().map(TraceId::as_str)
        );
        let start = Instant::now();
        let result = create_impl(ctx, cnpj, university_name).await;
        finish(ctx, "create_university", cnpj, start, result)
    }

    /// Read the stored record
    ///
    /// # Errors
    ///
    /// * `UniversityNotFound` - nothing is stored under `cnpj`
    /// * `Serialization` - the stored value is not a University
    pub async fn read_university(
        &self,
        ctx: &TransactionContext<'_>,
        cnpj: &str,
    ) -> Result<University> {
        log_op_start!(
            "read_university",
            cnpj = cnpj,
            tx_id = ctx.tx_id().as_str(),
            trace_id = ctx.trace_id().map(TraceId::as_str)
        );
        let start = Instant::now();
        let result = read_impl(ctx, cnpj).await;
        finish(ctx, "read_university", cnpj, start, result)
    }

    /// Replace the stored record with `{cnpj, university_name}`
    ///
    /// The whole record is rewritten; `cnpj` is preserved.
    ///
    /// # Errors
    ///
    /// * `UniversityNotFound` - nothing is stored under `cnpj`
    pub async fn update_university(
        &self,
        ctx: &TransactionContext<'_>,
        cnpj: &str,
        university_name: &str,
    ) -> Result<()> {
        log_op_start!(
            "update_university",
            cnpj = cnpj,
            tx_id = ctx.tx_id().as_str(),
            trace_id = ctx.trace_id().map(TraceId::as_str)
        );
        let start = Instant::now();
        let result = update_impl(ctx, cnpj, university_name).await;
        finish(ctx, "update_university", cnpj, start, result)
    }

    /// Remove the stored record
    ///
    /// # Errors
    ///
    /// * `UniversityNotFound` - nothing is stored under `cnpj`
    pub async fn delete_university(&self, ctx: &TransactionContext<'_>, cnpj: &str) -> Result<()> {
        log_op_start!(
            "delete_university",
            cnpj = cnpj,
            tx_id = ctx.tx_id().as_str(),
            trace_id = ctx.trace_id().map(TraceId::as_str)
        );
        let start = Instant::now();
        let result = delete_impl(ctx, cnpj).await;
        finish(ctx, "delete_university", cnpj, start, result)
    }
}

async fn exists_in_state(ctx: &TransactionContext<'_>, cnpj: &str) -> Result<bool> {
    let data = ctx.stub().get_state(cnpj).await?;
    Ok(!data.is_empty())
}

async fn create_impl(ctx: &TransactionContext<'_>, cnpj: &str, university_name: &str) -> Result<()> {
    if exists_in_state(ctx, cnpj).await? {
        return Err(ContractError::UniversityAlreadyExists {
            cnpj: cnpj.to_string(),
        });
    }

    let bytes = University::new(cnpj, university_name).to_state_bytes()?;
    ctx.stub().put_state(cnpj, bytes).await
}

async fn read_impl(ctx: &TransactionContext<'_>, cnpj: &str) -> Result<University> {
    let data = ctx.stub().get_state(cnpj).await?;
    if data.is_empty() {
        return Err(ContractError::UniversityNotFound {
            cnpj: cnpj.to_string(),
        });
    }

    University::from_state_bytes(&data)
}

async fn update_impl(ctx: &TransactionContext<'_>, cnpj: &str, university_name: &str) -> Result<()> {
    if !exists_in_state(ctx, cnpj).await? {
        return Err(ContractError::UniversityNotFound {
            cnpj: cnpj.to_string(),
        });
    }

    let bytes = University::new(cnpj, university_name).to_state_bytes()?;
    ctx.stub().put_state(cnpj, bytes).await
}

async fn delete_impl(ctx: &TransactionContext<'_>, cnpj: &str) -> Result<()> {
    if !exists_in_state(ctx, cnpj).await? {
        return Err(ContractError::UniversityNotFound {
            cnpj: cnpj.to_string(),
        });
    }

    ctx.stub().delete_state(cnpj).await
}

fn finish<T>(
    ctx: &TransactionContext<'_>,
    op: &'static str,
    cnpj: &str,
    start: Instant,
    result: Result<T>,
) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                cnpj = cnpj,
                tx_id = ctx.tx_id().as_str()
            );
        }
        Err(e) => {
            let ex_err = ExError::from(e.clone())
                .with_op(op)
                .with_invocation(ctx.invocation());
            log_op_error!(op, ex_err, duration_ms = duration_ms, cnpj = cnpj);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MockChaincodeStub;

    const STORED_1001: &[u8] = br#"{"cnpj":"1001","universityName":"university 1001 value"}"#;

    fn stub_with_1001() -> MockChaincodeStub {
        let mut stub = MockChaincodeStub::new();
        stub.expect_get_state().returning(|key: &str| {
            Ok(if key == "1001" {
                STORED_1001.to_vec()
            } else {
                Vec::new()
            })
        });
        stub
    }

    #[tokio::test]
    async fn test_exists_true_for_stored_record() {
        let stub = stub_with_1001();
        let ctx = TransactionContext::new(&stub);

        assert!(UniversityContract.university_exists(&ctx, "1001").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_false_for_unknown_record() {
        let stub = stub_with_1001();
        let ctx = TransactionContext::new(&stub);

        assert!(!UniversityContract.university_exists(&ctx, "1003").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_writes_exactly_once() {
        let mut stub = stub_with_1001();
        stub.expect_put_state()
            .withf(|key: &str, value: &Vec<u8>| {
                key == "1003"
                    && value.as_slice()
                        == br#"{"cnpj":"1003","universityName":"university 1003 value"}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let ctx = TransactionContext::new(&stub);

        UniversityContract
            .create_university(&ctx, "1003", "university 1003 value")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_rejects_existing_without_writing() {
        let mut stub = stub_with_1001();
        stub.expect_put_state().never();
        let ctx = TransactionContext::new(&stub);

        let err = UniversityContract
            .create_university(&ctx, "1001", "myvalue")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "The university 1001 already exists");
    }

    #[tokio::test]
    async fn test_read_returns_record() {
        let stub = stub_with_1001();
        let ctx = TransactionContext::new(&stub);

        let university = UniversityContract.read_university(&ctx, "1001").await.unwrap();
        assert_eq!(university, University::new("1001", "university 1001 value"));
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let stub = stub_with_1001();
        let ctx = TransactionContext::new(&stub);

        let err = UniversityContract.read_university(&ctx, "1003").await.unwrap_err();
        assert_eq!(err.to_string(), "The university 1003 does not exist");
    }

    #[tokio::test]
    async fn test_update_overwrites_once() {
        let mut stub = stub_with_1001();
        stub.expect_put_state()
            .withf(|key: &str, value: &Vec<u8>| {
                key == "1001"
                    && value.as_slice()
                        == br#"{"cnpj":"1001","universityName":"university 1001 new value"}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let ctx = TransactionContext::new(&stub);

        UniversityContract
            .update_university(&ctx, "1001", "university 1001 new value")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut stub = stub_with_1001();
        stub.expect_put_state().never();
        let ctx = TransactionContext::new(&stub);

        let err = UniversityContract
            .update_university(&ctx, "1003", "university 1003 new value")
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::UniversityNotFound { cnpj } if cnpj == "1003"));
    }

    #[tokio::test]
    async fn test_delete_removes_key_once() {
        let mut stub = stub_with_1001();
        stub.expect_delete_state()
            .withf(|key: &str| key == "1001")
            .times(1)
            .returning(|_| Ok(()));
        let ctx = TransactionContext::new(&stub);

        UniversityContract.delete_university(&ctx, "1001").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut stub = stub_with_1001();
        stub.expect_delete_state().never();
        let ctx = TransactionContext::new(&stub);

        let err = UniversityContract.delete_university(&ctx, "1003").await.unwrap_err();
        assert_eq!(err.to_string(), "The university 1003 does not exist");
    }

    #[tokio::test]
    async fn test_host_failure_propagates_from_exists() {
        let mut stub = MockChaincodeStub::new();
        stub.expect_get_state().returning(|_| {
            Err(ContractError::State {
                message: "peer unavailable".to_string(),
            })
        });
        let ctx = TransactionContext::new(&stub);

        let err = UniversityContract.university_exists(&ctx, "1001").await.unwrap_err();
        assert!(matches!(err, ContractError::State { .. }));
    }
}
