//! unichain CLI
//!
//! Runs University contract transactions against a local world state file.

use clap::{Parser, Subcommand};
use unichain_core::logging_facility;
use unichain_core::InvocationMode;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "unichain")]
#[command(about = "University chaincode - local transaction runner", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: config::ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a transaction and commit its writes
    Submit(commands::invoke::InvokeArgs),
    /// Run a read-only transaction
    Evaluate(commands::invoke::InvokeArgs),
    /// Print the contract metadata as JSON
    Metadata,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = cli.config.resolve();
    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::Submit(args) => {
            commands::invoke::execute(args, InvocationMode::Submit, &config).await
        }
        Commands::Evaluate(args) => {
            commands::invoke::execute(args, InvocationMode::Evaluate, &config).await
        }
        Commands::Metadata => commands::metadata::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
