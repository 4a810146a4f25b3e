use serde::{Deserialize, Serialize};

use crate::errors::{MinilinkError, Result};
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，分隔符为 `__`
pub const ENV_PREFIX: &str = "MINILINK";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - database: 数据库连接与重试配置
/// - logging: 日志配置
/// - shortener: 短码生成与跳转配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
}

impl StaticConfig {
    /// 从默认路径加载配置
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    /// 示例：MINILINK__DATABASE__DATABASE_URL=sqlite://links.db
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MinilinkError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 短码生成与跳转配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// 首次尝试的短码长度
    #[serde(default = "default_code_length")]
    pub default_code_length: usize,
    /// 冲突解决的最大尝试次数（每次尝试长度 +1）
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// 拼接完整短链接时使用的站点根地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 短码不存在时的跳转目标
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_database_url() -> String {
    "minilink.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    100
}

fn default_retry_max_delay_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_max_attempts() -> u32 {
    10
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_fallback_url() -> String {
    "https://en.wikipedia.org/wiki/HTTP_404".to_string()
}

fn default_max_url_length() -> usize {
    2000
}

// ============================================================
// Default implementations
// ============================================================

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
            retry_count: default_retry_count(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            default_code_length: default_code_length(),
            max_attempts: default_max_attempts(),
            base_url: default_base_url(),
            fallback_url: default_fallback_url(),
            max_url_length: default_max_url_length(),
        }
    }
}
