use unichain_core::MemoryStub;

/// Empty world state for a test
#[allow(dead_code)]
pub fn new_stub() -> MemoryStub {
    MemoryStub::new()
}

/// World state holding records 1001 and 1002, written as the contract would
#[allow(dead_code)]
pub fn seeded_stub() -> MemoryStub {
    MemoryStub::new()
        .with_entry(
            "1001",
            r#"{"cnpj":"1001","universityName":"university 1001 value"}"#,
        )
        .with_entry(
            "1002",
            r#"{"cnpj":"1002","universityName":"university 1002 value"}"#,
        )
}

/// Owned positional arguments
#[allow(dead_code)]
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
