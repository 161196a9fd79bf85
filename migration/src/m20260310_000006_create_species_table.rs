use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string_len_null(Species::ScientificName, 150))
                    .col(string_len_uniq(Species::CommonName, 100))
                    .col(string_len(Species::Kind, 20))
                    .col(string_len_null(Species::Category, 50))
                    .col(text_null(Species::Description))
                    .col(json_null(Species::TrailIds))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    ScientificName,
    CommonName,
    Kind,
    Category,
    Description,
    TrailIds,
}
