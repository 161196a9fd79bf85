use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether a catalog entry describes an animal or a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum SpeciesKind {
    #[sea_orm(string_value = "fauna")]
    Fauna,
    #[sea_orm(string_value = "flora")]
    Flora,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scientific_name: Option<String>,
    #[sea_orm(unique)]
    pub common_name: String,
    pub kind: SpeciesKind,
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// JSON array of trail ids where the species can be observed.
    #[sea_orm(nullable)]
    pub trail_ids: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
