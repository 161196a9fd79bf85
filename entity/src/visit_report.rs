use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "visit_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One report per reservation.
    #[sea_orm(unique)]
    pub reservation_id: i32,
    /// Visitor rating from 1 to 5.
    pub rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub problems: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
