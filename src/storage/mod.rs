use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod memory;
pub mod models;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStore;
pub use models::{UrlMapping, UrlMappingView};

/// URL ↔ 短码映射的持久化存储
///
/// 每个方法对并发调用者都必须是原子的。短码和原始 URL 的唯一性由存储自身保证，
/// `create` 在违反约束时返回 `DuplicateCode` / `DuplicateUrl`，两者同时冲突时优先返回
/// `DuplicateUrl`。查询不到时返回 `Ok(None)`。
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>>;

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>>;

    async fn exists_by_code(&self, short_code: &str) -> Result<bool>;

    async fn create(&self, original_url: &str, short_code: &str) -> Result<UrlMapping>;

    /// 原子地将点击数加一并返回更新后的映射
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<UrlMapping>>;

    async fn count(&self) -> Result<u64>;

    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    /// 根据数据库配置创建存储，后端类型从 URL 自动推断
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn MappingStore>> {
        let backend_type = backend::infer_backend_from_url(&config.database_url)?;
        let storage = SeaOrmStorage::new(&config.database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}
