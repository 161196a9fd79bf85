use sea_orm_migration::{prelude::*, schema::*};

use super::m20260310_000004_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitReport::Table)
                    .if_not_exists()
                    .col(pk_auto(VisitReport::Id))
                    .col(integer_uniq(VisitReport::ReservationId))
                    .col(integer_null(VisitReport::Rating))
                    .col(text_null(VisitReport::Comments))
                    .col(text_null(VisitReport::Problems))
                    .col(
                        timestamp(VisitReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_report_reservation_id")
                            .from(VisitReport::Table, VisitReport::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisitReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VisitReport {
    Table,
    Id,
    ReservationId,
    Rating,
    Comments,
    Problems,
    CreatedAt,
}
