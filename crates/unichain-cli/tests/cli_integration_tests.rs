//! CLI integration tests
//!
//! Run the built binary against a world state file in a temp directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(db_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_unichain"))
        .env_remove("UNICHAIN_STATE_DB")
        .env("RUST_LOG", "off")
        .arg("--state-db")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_cli_create_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");

    let create = run(&db_path, &["submit", "createUniversity", "1003", "X"]);
    assert!(create.status.success(), "stderr: {}", String::from_utf8_lossy(&create.stderr));
    assert_eq!(stdout(&create), "");

    let read = run(&db_path, &["evaluate", "readUniversity", "1003"]);
    assert!(read.status.success());
    assert_eq!(stdout(&read), r#"{"cnpj":"1003","universityName":"X"}"#);

    let exists = run(&db_path, &["evaluate", "universityExists", "1003"]);
    assert_eq!(stdout(&exists), "true");
}

#[test]
fn test_cli_duplicate_create_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");

    assert!(run(&db_path, &["submit", "createUniversity", "1001", "A"])
        .status
        .success());
    let second = run(&db_path, &["submit", "createUniversity", "1001", "B"]);

    assert_eq!(second.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("Error: The university 1001 already exists"));
}

#[test]
fn test_cli_evaluate_refuses_submit_transaction() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");

    let output = run(&db_path, &["evaluate", "deleteUniversity", "1001"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be submitted"));
}

#[test]
fn test_cli_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");

    let output = run(&db_path, &["metadata"]);
    assert!(output.status.success());

    let metadata: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(metadata["info"]["title"], "UniversityContract");
    assert_eq!(
        metadata["contract"]["transactions"].as_array().unwrap().len(),
        5
    );
}

fn run_with_env(envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_unichain"));
    command
        .env_remove("UNICHAIN_STATE_DB")
        .env_remove("UNICHAIN_LOG_FORMAT")
        .env("RUST_LOG", "off");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.args(args).output().expect("Failed to execute CLI")
}

#[test]
fn test_cli_state_db_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("from_env").join("world_state.db");
    let db = db_path.to_str().unwrap();

    let create = run_with_env(
        &[("UNICHAIN_STATE_DB", db)],
        &["submit", "createUniversity", "2001", "Env U"],
    );
    assert!(create.status.success(), "stderr: {}", String::from_utf8_lossy(&create.stderr));
    assert!(db_path.exists());

    let read = run_with_env(
        &[("UNICHAIN_STATE_DB", db)],
        &["evaluate", "readUniversity", "2001"],
    );
    assert_eq!(stdout(&read), r#"{"cnpj":"2001","universityName":"Env U"}"#);

    // the flag wins over the environment
    let other = temp_dir.path().join("other.db");
    let via_flag = run(&other, &["evaluate", "universityExists", "2001"]);
    assert_eq!(stdout(&via_flag), "false");
}

#[test]
fn test_cli_json_logs_carry_supplied_ids() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");
    let db = db_path.to_str().unwrap();

    let output = run_with_env(
        &[
            ("UNICHAIN_STATE_DB", db),
            ("UNICHAIN_LOG_FORMAT", "json"),
            ("RUST_LOG", "unichain=info"),
        ],
        &[
            "evaluate",
            "--tx-id",
            "tx-cli-3001",
            "--trace-id",
            "trace-cli-3001",
            "readUniversity",
            "3001",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let error_line = stderr
        .lines()
        .find(|line| line.contains("end_error"))
        .expect("end_error log line");
    let event: serde_json::Value = serde_json::from_str(error_line).unwrap();
    assert_eq!(event["fields"]["tx_id"], "tx-cli-3001");
    assert_eq!(event["fields"]["trace_id"], "trace-cli-3001");
    assert_eq!(event["fields"]["err_code"], "ERR_NOT_FOUND");
}

#[test]
fn test_cli_rejects_unknown_log_format() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("world_state.db");

    let output = run(&db_path, &["--log-format", "test", "metadata"]);
    assert!(!output.status.success());
}
