use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create visibility enum
        manager
            .create_type(
                Type::create()
                    .as_enum(Visibility::Enum)
                    .values([
                        Visibility::Draft,
                        Visibility::Published,
                        Visibility::Unlisted,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_uuid(Projects::Id))
                    .col(string(Projects::Title))
                    .col(string_null(Projects::YoutubeId))
                    .col(string_null(Projects::ThumbnailUrl))
                    .col(text_null(Projects::Description))
                    .col(string_null(Projects::Format))
                    .col(integer_null(Projects::DurationSeconds))
                    .col(json_binary(Projects::Tools).default("[]"))
                    .col(json_binary(Projects::Categories).default("[]"))
                    .col(string_null(Projects::Role))
                    .col(
                        ColumnDef::new(Projects::Visibility)
                            .enumeration(
                                Visibility::Enum,
                                [
                                    Visibility::Draft,
                                    Visibility::Published,
                                    Visibility::Unlisted,
                                ],
                            )
                            .not_null()
                            .default("draft"),
                    )
                    .col(integer(Projects::SortIndex).default(0))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Projects::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_sort_index")
                    .table(Projects::Table)
                    .col(Projects::SortIndex)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_visibility")
                    .table(Projects::Table)
                    .col(Projects::Visibility)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Visibility::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    YoutubeId,
    ThumbnailUrl,
    Description,
    Format,
    DurationSeconds,
    Tools,
    Categories,
    Role,
    Visibility,
    SortIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Visibility {
    #[sea_orm(iden = "visibility")]
    Enum,
    #[sea_orm(iden = "draft")]
    Draft,
    #[sea_orm(iden = "published")]
    Published,
    #[sea_orm(iden = "unlisted")]
    Unlisted,
}
