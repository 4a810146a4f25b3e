//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for minilink using clap's derive macros.

use clap::{Parser, Subcommand};

/// minilink - digest-based URL shortener
#[derive(Parser, Debug)]
#[command(name = "minilink")]
#[command(version)]
#[command(about = "Shorten URLs into stable, collision-free codes", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or create the short code for a URL
    Shorten {
        /// URL to shorten (http:// or https://)
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect a short code without counting a click
    Lookup {
        short_code: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Follow a short code: count a click and print the destination
    Visit { short_code: String },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
}
