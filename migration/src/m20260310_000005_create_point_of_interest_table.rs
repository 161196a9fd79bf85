use sea_orm_migration::{prelude::*, schema::*};

use super::m20260310_000003_create_trail_table::Trail;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointOfInterest::Table)
                    .if_not_exists()
                    .col(pk_auto(PointOfInterest::Id))
                    .col(integer(PointOfInterest::TrailId))
                    .col(string_len(PointOfInterest::Name, 100))
                    .col(text_null(PointOfInterest::Description))
                    .col(string_len_null(PointOfInterest::Kind, 50))
                    .col(integer_null(PointOfInterest::TrailOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_of_interest_trail_id")
                            .from(PointOfInterest::Table, PointOfInterest::TrailId)
                            .to(Trail::Table, Trail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_point_of_interest_trail_id_name")
                    .table(PointOfInterest::Table)
                    .col(PointOfInterest::TrailId)
                    .col(PointOfInterest::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointOfInterest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PointOfInterest {
    Table,
    Id,
    TrailId,
    Name,
    Description,
    Kind,
    TrailOrder,
}
