//! Metadata command
//!
//! Usage: unichain metadata

use unichain_core::ContractMetadata;

pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    let metadata = ContractMetadata::describe();
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
