use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use minilink::cli::Cli;
use minilink::config::{get_config, init_config, init_config_from};
use minilink::interfaces::cli::run_cli_command;
use minilink::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    // guard 必须存活到进程结束，否则非阻塞日志会丢失
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!("Using database: {}", config.database.database_url);

    if let Err(e) = run_cli_command(cli.command, &config).await {
        eprintln!("{}", e.format_colored());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
