//! CLI tests
//!
//! Tests for argument parsing and the command handlers.

use std::sync::Arc;

use clap::Parser;
use minilink::cli::{Cli, Commands, ConfigCommands};
use minilink::config::{ShortenerConfig, StaticConfig};
use minilink::errors::MinilinkError;
use minilink::interfaces::cli::CliError;
use minilink::interfaces::cli::commands::{config_generate, lookup_code, shorten_url, visit_code};
use minilink::services::ResolutionService;
use minilink::storage::MemoryStore;
use tempfile::TempDir;

fn memory_service() -> ResolutionService {
    ResolutionService::new(Arc::new(MemoryStore::new()))
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_shorten_with_config() {
        let cli = Cli::parse_from([
            "minilink",
            "shorten",
            "https://www.test.com",
            "--json",
            "-c",
            "custom.toml",
        ]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        match cli.command {
            Commands::Shorten { url, json } => {
                assert_eq!(url, "https://www.test.com");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_generate_force() {
        let cli = Cli::parse_from(["minilink", "config", "generate", "out.toml", "--force"]);
        match cli.command {
            Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            } => {
                assert_eq!(output_path.as_deref(), Some("out.toml"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_visit_requires_code() {
        assert!(Cli::try_parse_from(["minilink", "visit"]).is_err());
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[tokio::test]
    async fn test_shorten_builds_short_url() {
        let service = memory_service();
        let config = ShortenerConfig::default();

        let view = shorten_url(&service, &config, "  https://www.test.com  ", false)
            .await
            .unwrap();

        assert_eq!(view.original_url, "https://www.test.com");
        assert_eq!(view.short_url, "http://127.0.0.1:8000/DOPUzSg/");
        assert_eq!(view.click_count, 0);
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let service = memory_service();
        let config = ShortenerConfig::default();

        for url in ["", "javascript:alert(1)", "ftp://example.com", "not a url"] {
            let err = shorten_url(&service, &config, url, true).await.unwrap_err();
            assert!(matches!(err, CliError::Core(MinilinkError::InvalidInput(_))));
        }
        assert_eq!(service.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_shorten_respects_max_url_length() {
        let service = memory_service();
        let config = ShortenerConfig {
            max_url_length: 30,
            ..Default::default()
        };
        let url = format!("https://example.com/{}", "x".repeat(20));

        assert!(shorten_url(&service, &config, &url, false).await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_unknown_code() {
        let service = memory_service();
        let err = lookup_code(&service, &ShortenerConfig::default(), "badcode", false)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_visit_counts_and_falls_back() {
        let service = memory_service();
        let config = ShortenerConfig::default();
        shorten_url(&service, &config, "https://www.test.com", false)
            .await
            .unwrap();

        let target = visit_code(&service, &config, "DOPUzSg").await.unwrap();
        assert_eq!(target, "https://www.test.com");

        let view = lookup_code(&service, &config, "DOPUzSg", true).await.unwrap();
        assert_eq!(view.click_count, 1);

        let fallback = visit_code(&service, &config, "badcode").await.unwrap();
        assert_eq!(fallback, config.fallback_url);
    }

    #[test]
    fn test_config_generate_writes_loadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();

        config_generate(Some(path_str.clone()), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: StaticConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.shortener.default_code_length, 7);

        // 已存在时需要 --force
        assert!(matches!(
            config_generate(Some(path_str.clone()), false),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(config_generate(Some(path_str), true).is_ok());
    }
}
