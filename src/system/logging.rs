//! Logging system initialization
//!
//! This module sets up the tracing subscriber based on application configuration.

use std::path::Path;

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::Result;

/// Build the log writer described by `config`
///
/// Console output goes to stderr so command output on stdout stays clean.
fn build_writer(config: &LoggingConfig) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(Box::new(std::io::stderr()));
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("minilink.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| {
                crate::errors::MinilinkError::file_operation(format!(
                    "Failed to create rolling log appender: {}",
                    e
                ))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;
        Ok(Box::new(file))
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: call once during startup, after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - must be kept alive for the duration of the program
///   so buffered log lines are flushed
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let writer = build_writer(config)?;
    let to_console = config.file.as_deref().is_none_or(str::is_empty);

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    // 已经初始化过的全局 subscriber 不覆盖（例如测试中多次调用）
    if config.format == "json" {
        let _ = subscriber_builder.json().try_init();
    } else {
        let _ = subscriber_builder.try_init();
    }

    Ok(guard)
}
