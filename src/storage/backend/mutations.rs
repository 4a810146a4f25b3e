//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, ExprTrait, SqlErr, TransactionTrait};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{mapping_to_active_model, model_to_mapping};
use super::retry;
use crate::errors::{MinilinkError, Result};
use crate::storage::UrlMapping;

use migration::entities::url_mapping;

fn truncate_for_log(url: &str) -> String {
    if url.chars().count() > 50 {
        format!("{}...", url.chars().take(50).collect::<String>())
    } else {
        url.to_string()
    }
}

impl SeaOrmStorage {
    /// 插入新映射
    ///
    /// 唯一约束冲突时重新按 URL 查询一次，以区分 `DuplicateUrl` 与 `DuplicateCode`
    pub async fn insert_mapping(&self, original_url: &str, short_code: &str) -> Result<UrlMapping> {
        let mapping = UrlMapping::new(original_url, short_code);
        let active_model = mapping_to_active_model(&mapping);
        let db = &self.db;

        let result = retry::with_retry(
            &format!("create({})", short_code),
            self.retry_config,
            || async {
                url_mapping::Entity::insert(active_model.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await;

        match result {
            Ok(_) => {
                info!(
                    "Url mapping created: {} -> {}",
                    short_code,
                    truncate_for_log(original_url)
                );
                Ok(mapping)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!("Unique constraint violated while creating {}: {}", short_code, e);
                if self.get_by_url(original_url).await?.is_some() {
                    Err(MinilinkError::duplicate_url(format!(
                        "URL already mapped: {}",
                        truncate_for_log(original_url)
                    )))
                } else {
                    Err(MinilinkError::duplicate_code(format!(
                        "Short code already taken: {}",
                        short_code
                    )))
                }
            }
            Err(e) => Err(MinilinkError::database_operation(format!(
                "创建映射 '{}' 失败 (url: {}): {}",
                short_code,
                truncate_for_log(original_url),
                e
            ))),
        }
    }

    /// 原子地将点击数加一
    ///
    /// 在同一事务中执行 `UPDATE ... SET click_count = click_count + 1` 并读回该行，
    /// 不在应用层做读-改-写
    pub async fn increment_click_count(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        let db = &self.db;
        let code_owned = short_code.to_string();

        let stmt = Query::update()
            .table(url_mapping::Entity)
            .value(
                url_mapping::Column::ClickCount,
                Expr::col(url_mapping::Column::ClickCount).add(Expr::val(1i64)),
            )
            .and_where(Expr::col(url_mapping::Column::ShortCode).eq(Expr::val(short_code)))
            .to_owned();
        let stmt_ref = &stmt;

        let model = retry::with_retry(
            &format!("increment_clicks({})", short_code),
            self.retry_config,
            || async {
                let txn = db.begin().await?;
                let updated = txn.execute(stmt_ref).await?;
                if updated.rows_affected() == 0 {
                    txn.rollback().await?;
                    return Ok::<_, DbErr>(None);
                }
                let model = url_mapping::Entity::find_by_id(code_owned.clone())
                    .one(&txn)
                    .await?;
                txn.commit().await?;
                Ok::<_, DbErr>(model)
            },
        )
        .await
        .map_err(|e| MinilinkError::database_operation(format!("更新点击数失败: {}", e)))?;

        Ok(model.map(model_to_mapping))
    }
}
