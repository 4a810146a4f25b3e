//! Lookup command

use colored::Colorize;

use crate::config::ShortenerConfig;
use crate::interfaces::cli::CliError;
use crate::services::ResolutionService;
use crate::storage::UrlMappingView;

pub async fn lookup_code(
    service: &ResolutionService,
    config: &ShortenerConfig,
    short_code: &str,
    json: bool,
) -> Result<UrlMappingView, CliError> {
    let Some(mapping) = service.lookup(short_code).await? else {
        return Err(CliError::NotFound(format!(
            "Shortened Url not found: {}",
            short_code
        )));
    };

    let view = UrlMappingView::from_mapping(&mapping, &config.base_url);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "{} -> {}",
            view.short_url.cyan(),
            view.original_url.blue().underline()
        );
        println!(
            "  {} {}",
            "clicks:".dimmed(),
            view.click_count.to_string().green()
        );
        println!(
            "  {} {}",
            "created:".dimmed(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .yellow()
        );
    }

    Ok(view)
}
