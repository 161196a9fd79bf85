use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// What a point along a trail marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "snake_case")]
pub enum PoiKind {
    #[sea_orm(string_value = "viewpoint")]
    Viewpoint,
    #[sea_orm(string_value = "waterfall")]
    Waterfall,
    #[sea_orm(string_value = "rock_formation")]
    RockFormation,
    #[sea_orm(string_value = "fauna")]
    Fauna,
    #[sea_orm(string_value = "flora")]
    Flora,
    #[sea_orm(string_value = "historic")]
    Historic,
    #[sea_orm(string_value = "rest_area")]
    RestArea,
    #[sea_orm(string_value = "hazard")]
    Hazard,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "point_of_interest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trail_id: i32,
    /// Unique within the owning trail (enforced by the service).
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub kind: Option<PoiKind>,
    /// Position of the point along the trail, 1-based.
    pub trail_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trail::Entity",
        from = "Column::TrailId",
        to = "super::trail::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Trail,
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
