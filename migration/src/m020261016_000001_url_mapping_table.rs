use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // short_code 是主键，天然唯一
        manager
            .create_table(
                Table::create()
                    .table(UrlMapping::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlMapping::ShortCode)
                            .string_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UrlMapping::OriginalUrl)
                            .string_len(2000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UrlMapping::ClickCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UrlMapping::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一 URL 只能有一条映射
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_url_mapping_original_url")
                    .table(UrlMapping::Table)
                    .col(UrlMapping::OriginalUrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_url_mapping_created_at")
                    .table(UrlMapping::Table)
                    .col(UrlMapping::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_url_mapping_created_at")
                    .table(UrlMapping::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_url_mapping_original_url")
                    .table(UrlMapping::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UrlMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UrlMapping {
    Table,
    ShortCode,
    OriginalUrl,
    ClickCount,
    CreatedAt,
}
