use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260310_000001_create_user_table::User, m20260310_000002_create_park_table::Park,
    m20260310_000003_create_trail_table::Trail,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::ParkId))
                    .col(integer_null(Reservation::TrailId))
                    .col(date(Reservation::VisitDate))
                    .col(time_null(Reservation::EntryTime))
                    .col(integer(Reservation::Visitors).default(1))
                    .col(string_len(Reservation::Status, 20).default("active"))
                    .col(timestamp_null(Reservation::CheckIn))
                    .col(timestamp_null(Reservation::CheckOut))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_park_id")
                            .from(Reservation::Table, Reservation::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_trail_id")
                            .from(Reservation::Table, Reservation::TrailId)
                            .to(Trail::Table, Trail::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The availability check aggregates active reservations per
        // park/trail/date on every booking.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_park_date_status")
                    .table(Reservation::Table)
                    .col(Reservation::ParkId)
                    .col(Reservation::VisitDate)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    ParkId,
    TrailId,
    VisitDate,
    EntryTime,
    Visitors,
    Status,
    CheckIn,
    CheckOut,
    CreatedAt,
}
