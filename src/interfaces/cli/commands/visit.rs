//! Visit command

use colored::Colorize;

use crate::config::ShortenerConfig;
use crate::interfaces::cli::CliError;
use crate::services::ResolutionService;

/// Count a click and print where the short code leads
///
/// Unknown codes lead to the configured fallback destination.
pub async fn visit_code(
    service: &ResolutionService,
    config: &ShortenerConfig,
    short_code: &str,
) -> Result<String, CliError> {
    match service.record_click_and_resolve(short_code).await? {
        Some(target) => {
            println!("{}", target);
            Ok(target)
        }
        None => {
            eprintln!(
                "{} Unknown short code {}, using fallback",
                "⚠".bold().yellow(),
                short_code.magenta()
            );
            println!("{}", config.fallback_url);
            Ok(config.fallback_url.clone())
        }
    }
}
