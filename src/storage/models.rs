use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 原始 URL 与短码之间的映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_code: String,
    #[serde(default)]
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// 新建映射，点击数为 0，创建时间为当前时间
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            click_count: 0,
            created_at: Utc::now(),
        }
    }

    /// 拼接完整短链接，形如 `{base_url}/{short_code}/`
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.short_code)
    }
}

/// 对外展示的映射视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMappingView {
    pub original_url: String,
    pub short_url: String,
    pub click_count: u64,
}

impl UrlMappingView {
    pub fn from_mapping(mapping: &UrlMapping, base_url: &str) -> Self {
        Self {
            original_url: mapping.original_url.clone(),
            short_url: mapping.short_url(base_url),
            click_count: mapping.click_count,
        }
    }
}
