use crate::storage::UrlMapping;
use migration::entities::url_mapping;

/// 将 Sea-ORM Model 转换为 UrlMapping
pub fn model_to_mapping(model: url_mapping::Model) -> UrlMapping {
    UrlMapping {
        original_url: model.original_url,
        short_code: model.short_code,
        click_count: model.click_count.max(0) as u64,
        created_at: model.created_at,
    }
}

/// 将新建的 UrlMapping 转换为 ActiveModel（仅用于插入）
pub fn mapping_to_active_model(mapping: &UrlMapping) -> url_mapping::ActiveModel {
    use sea_orm::ActiveValue::Set;

    url_mapping::ActiveModel {
        short_code: Set(mapping.short_code.clone()),
        original_url: Set(mapping.original_url.clone()),
        click_count: Set(mapping.click_count as i64),
        created_at: Set(mapping.created_at),
    }
}
