//! CLI interface module
//!
//! This module wires clap-parsed commands to the resolution service.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::MinilinkError;
use crate::services::{CodePolicy, ResolutionService};
use crate::storage::StorageFactory;
use commands::{config_generate, lookup_code, shorten_url, visit_code};

#[derive(Debug)]
pub enum CliError {
    Core(MinilinkError),
    NotFound(String),
    InvalidArgument(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Core(err) => err.format_simple(),
            CliError::NotFound(msg) => format!("Not found: {}", msg),
            CliError::InvalidArgument(msg) => format!("Invalid argument: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Core(err) => err.format_colored(),
            CliError::NotFound(msg) => {
                format!("{} {}", "Not found:".yellow().bold(), msg.white())
            }
            CliError::InvalidArgument(msg) => {
                format!("{} {}", "Invalid argument:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<MinilinkError> for CliError {
    fn from(err: MinilinkError) -> Self {
        CliError::Core(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(MinilinkError::from(err))
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate doesn't need DB connection
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        config_generate(output_path, force)?;
        return Ok(());
    }

    let store = StorageFactory::create(&config.database).await?;
    let service =
        ResolutionService::with_policy(store, CodePolicy::from(&config.shortener))?;
    let shortener = &config.shortener;

    match cmd {
        Commands::Shorten { url, json } => {
            shorten_url(&service, shortener, &url, json).await?;
        }
        Commands::Lookup { short_code, json } => {
            lookup_code(&service, shortener, &short_code, json).await?;
        }
        Commands::Visit { short_code } => {
            visit_code(&service, shortener, &short_code).await?;
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}
