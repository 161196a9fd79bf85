use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical difficulty grade of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TrailDifficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "moderate")]
    Moderate,
    #[sea_orm(string_value = "hard")]
    Hard,
    #[sea_orm(string_value = "extreme")]
    Extreme,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub park_id: i32,
    /// Unique within the owning park (enforced by the trail service).
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    /// Daily visitor limit for this trail. `None` means unbounded.
    pub max_capacity: Option<i32>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::park::Entity",
        from = "Column::ParkId",
        to = "super::park::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Park,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::point_of_interest::Entity")]
    PointOfInterest,
}

impl Related<super::park::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Park.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::point_of_interest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointOfInterest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
