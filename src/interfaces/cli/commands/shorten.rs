//! Shorten command

use colored::Colorize;

use crate::config::ShortenerConfig;
use crate::errors::MinilinkError;
use crate::interfaces::cli::CliError;
use crate::services::ResolutionService;
use crate::storage::UrlMappingView;
use crate::utils::validate_url;

pub async fn shorten_url(
    service: &ResolutionService,
    config: &ShortenerConfig,
    url: &str,
    json: bool,
) -> Result<UrlMappingView, CliError> {
    let url = url.trim();
    validate_url(url, config.max_url_length).map_err(MinilinkError::from)?;

    let mapping = service.get_or_create(url).await?;
    let view = UrlMappingView::from_mapping(&mapping, &config.base_url);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "{} {} -> {}",
            "✓".bold().green(),
            view.short_url.cyan(),
            view.original_url.blue().underline()
        );
        if view.click_count > 0 {
            println!(
                "  {}",
                format!("(clicks: {})", view.click_count).dimmed().cyan()
            );
        }
    }

    Ok(view)
}
