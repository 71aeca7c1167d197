//! CLI configuration
//!
//! Every setting can come from a flag or from the environment; flags win.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use unichain_core::logging_facility::Profile;

pub const DEFAULT_STATE_DB: &str = ".unichain/world_state.db";

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// World state database file
    #[arg(long, global = true, env = "UNICHAIN_STATE_DB", default_value = DEFAULT_STATE_DB)]
    pub state_db: PathBuf,

    /// Log output format: dev (human readable) or json
    #[arg(long, global = true, env = "UNICHAIN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Dev)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Dev,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

/// Resolved configuration for one CLI run
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub state_db: PathBuf,
    pub log_profile: Profile,
}

impl ConfigArgs {
    pub fn resolve(self) -> CliConfig {
        CliConfig {
            state_db: self.state_db,
            log_profile: self.log_format.into(),
        }
    }
}
