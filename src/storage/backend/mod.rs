//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{MinilinkError, Result};
use crate::storage::{MappingStore, UrlMapping};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{mapping_to_active_model, model_to_mapping};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")
    {
        Ok("postgres".to_string())
    } else {
        Err(MinilinkError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    pub async fn new(
        database_url: &str,
        backend_name: &str,
        config: &DatabaseConfig,
    ) -> Result<Self> {
        if database_url.is_empty() {
            return Err(MinilinkError::database_config("database_url 未设置"));
        }

        let db = match backend_name {
            "sqlite" => connect_sqlite(database_url).await?,
            "postgres" => connect_generic(database_url, backend_name, config).await?,
            other => {
                return Err(MinilinkError::database_config(format!(
                    "不支持的数据库类型: {}",
                    other
                )));
            }
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
            retry_config: retry::RetryConfig::from(config),
        };

        run_migrations(&storage.db).await?;

        info!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 获取底层数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl MappingStore for SeaOrmStorage {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>> {
        self.get_by_url(original_url).await
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        self.get_by_code(short_code).await
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool> {
        self.code_exists(short_code).await
    }

    async fn create(&self, original_url: &str, short_code: &str) -> Result<UrlMapping> {
        self.insert_mapping(original_url, short_code).await
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        self.increment_click_count(short_code).await
    }

    async fn count(&self) -> Result<u64> {
        self.count_mappings().await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
