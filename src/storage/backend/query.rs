//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::{SeaOrmStorage, retry};
use crate::errors::{MinilinkError, Result};
use crate::storage::UrlMapping;

use migration::entities::url_mapping;

use super::converters::model_to_mapping;

impl SeaOrmStorage {
    pub async fn get_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        let db = &self.db;
        let code_owned = short_code.to_string();

        let model = retry::with_retry(
            &format!("find_by_code({})", short_code),
            self.retry_config,
            || async { url_mapping::Entity::find_by_id(code_owned.clone()).one(db).await },
        )
        .await
        .map_err(|e| MinilinkError::database_operation(format!("查询短码失败: {}", e)))?;

        Ok(model.map(model_to_mapping))
    }

    pub async fn get_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>> {
        let db = &self.db;

        let model = retry::with_retry("find_by_url", self.retry_config, || async {
            url_mapping::Entity::find()
                .filter(url_mapping::Column::OriginalUrl.eq(original_url))
                .one(db)
                .await
        })
        .await
        .map_err(|e| MinilinkError::database_operation(format!("按 URL 查询失败: {}", e)))?;

        Ok(model.map(model_to_mapping))
    }

    pub async fn code_exists(&self, short_code: &str) -> Result<bool> {
        let db = &self.db;

        let count = retry::with_retry(
            &format!("exists_by_code({})", short_code),
            self.retry_config,
            || async {
                url_mapping::Entity::find()
                    .filter(url_mapping::Column::ShortCode.eq(short_code))
                    .count(db)
                    .await
            },
        )
        .await
        .map_err(|e| MinilinkError::database_operation(format!("检查短码失败: {}", e)))?;

        Ok(count > 0)
    }

    pub async fn count_mappings(&self) -> Result<u64> {
        let db = &self.db;

        retry::with_retry("count", self.retry_config, || async {
            url_mapping::Entity::find().count(db).await
        })
        .await
        .map_err(|e| MinilinkError::database_operation(format!("统计映射数量失败: {}", e)))
    }
}
