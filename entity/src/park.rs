use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "park")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    /// Daily visitor limit across the whole park. `None` means unbounded.
    pub max_capacity: Option<i32>,
    /// Opening hours as a JSON document (per-weekday ranges).
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_hours: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trail::Entity")]
    Trail,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
