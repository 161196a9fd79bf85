use sea_orm_migration::{prelude::*, schema::*};

use super::m20260310_000002_create_park_table::Park;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trail::Table)
                    .if_not_exists()
                    .col(pk_auto(Trail::Id))
                    .col(integer(Trail::ParkId))
                    .col(string_len(Trail::Name, 100))
                    .col(text_null(Trail::Description))
                    .col(string_len_null(Trail::Difficulty, 20))
                    .col(double_null(Trail::DistanceKm))
                    .col(integer_null(Trail::EstimatedMinutes))
                    .col(integer_null(Trail::MaxCapacity))
                    .col(boolean(Trail::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_park_id")
                            .from(Trail::Table, Trail::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Trail names only have to be unique inside their park.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_trail_park_id_name")
                    .table(Trail::Table)
                    .col(Trail::ParkId)
                    .col(Trail::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trail {
    Table,
    Id,
    ParkId,
    Name,
    Description,
    Difficulty,
    DistanceKm,
    EstimatedMinutes,
    MaxCapacity,
    Active,
}
