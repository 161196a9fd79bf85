pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_user_table;
mod m20260310_000002_create_park_table;
mod m20260310_000003_create_trail_table;
mod m20260310_000004_create_reservation_table;
mod m20260310_000005_create_point_of_interest_table;
mod m20260310_000006_create_species_table;
mod m20260310_000007_create_visit_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_000001_create_user_table::Migration),
            Box::new(m20260310_000002_create_park_table::Migration),
            Box::new(m20260310_000003_create_trail_table::Migration),
            Box::new(m20260310_000004_create_reservation_table::Migration),
            Box::new(m20260310_000005_create_point_of_interest_table::Migration),
            Box::new(m20260310_000006_create_species_table::Migration),
            Box::new(m20260310_000007_create_visit_report_table::Migration),
        ]
    }
}
