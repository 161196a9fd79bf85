use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Name, 100))
                    .col(string_len_uniq(User::Email, 150))
                    .col(string_len_null(User::Phone, 20))
                    .col(string_len(User::Role, 20).default("visitor"))
                    .col(integer_null(User::Age))
                    .col(string_len_null(User::PasswordHash, 200))
                    .col(boolean(User::Active).default(true))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Age,
    PasswordHash,
    Active,
    CreatedAt,
}
