#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{new_stub, seeded_stub};
use unichain_core::logging_facility::test_capture::init_test_capture;
use unichain_core::{log_op_end, log_op_start, TransactionContext, UniversityContract};
use unichain_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use unichain_core_types::{InvocationContext, TraceId, TxId};

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_1";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].field("duration_ms"), Some("42"));
}

#[tokio::test]
async fn test_create_logs_single_start_and_end() {
    let capture = init_test_capture();
    let stub = new_stub();
    let ctx = TransactionContext::new(&stub);

    UniversityContract
        .create_university(&ctx, "log-7001", "Logged U")
        .await
        .unwrap();

    let for_key = |op: &str, event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some(op)
                && e.event.as_deref() == Some(event)
                && e.field("cnpj") == Some("log-7001")
        })
    };

    assert_eq!(for_key("create_university", EVENT_START), 1);
    assert_eq!(for_key("create_university", EVENT_END), 1);
    // the internal existence check owns no lifecycle of its own
    assert_eq!(for_key("university_exists", EVENT_START), 0);
}

#[tokio::test]
async fn test_failed_create_logs_error_code() {
    let capture = init_test_capture();
    let stub = seeded_stub();
    let ctx = TransactionContext::new(&stub);

    UniversityContract
        .create_university(&ctx, "1001", "dup")
        .await
        .unwrap_err();

    capture.assert_event_exists("create_university", EVENT_END_ERROR);
    let error_event = capture
        .events_for("create_university")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR) && e.field("cnpj") == Some("1001"))
        .expect("error event for 1001");

    assert_eq!(error_event.field("err_code"), Some("ERR_ALREADY_EXISTS"));
    assert_eq!(error_event.field("err_kind"), Some("AlreadyExists"));
}

#[tokio::test]
async fn test_host_assigned_ids_reach_error_event() {
    let capture = init_test_capture();
    let stub = new_stub();
    let invocation = InvocationContext::with_tx_id(TxId::from_string("tx-host-8001".to_string()))
        .with_trace_id(TraceId::from_string("trace-8001".to_string()));
    let ctx = TransactionContext::with_invocation(&stub, invocation);

    UniversityContract
        .read_university(&ctx, "log-8001")
        .await
        .unwrap_err();

    let events: Vec<_> = capture
        .events_for("read_university")
        .into_iter()
        .filter(|e| e.field("cnpj") == Some("log-8001"))
        .collect();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("tx_id"), Some("tx-host-8001"));
    assert_eq!(events[0].field("trace_id"), Some("trace-8001"));

    assert_eq!(events[1].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[1].field("err_code"), Some("ERR_NOT_FOUND"));
    assert_eq!(events[1].field("tx_id"), Some("tx-host-8001"));
    assert_eq!(events[1].field("trace_id"), Some("trace-8001"));
}

#[tokio::test]
async fn test_minted_tx_id_logged_without_trace_id() {
    let capture = init_test_capture();
    let stub = new_stub();
    let ctx = TransactionContext::new(&stub);

    UniversityContract
        .delete_university(&ctx, "log-8002")
        .await
        .unwrap_err();

    let error_event = capture
        .events_for("delete_university")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR) && e.field("cnpj") == Some("log-8002"))
        .expect("error event for log-8002");

    assert_eq!(error_event.field("tx_id"), Some(ctx.tx_id().as_str()));
    assert_eq!(error_event.field("trace_id"), None);
}
