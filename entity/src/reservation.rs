use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a reservation.
///
/// `Active` is the only initial state. `Cancelled` and `Completed` are
/// terminal; `Completed` is reachable only through check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub park_id: i32,
    /// `None` books the park as a whole rather than a specific trail.
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub visitors: i32,
    pub status: ReservationStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::park::Entity",
        from = "Column::ParkId",
        to = "super::park::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Park,
    #[sea_orm(
        belongs_to = "super::trail::Entity",
        from = "Column::TrailId",
        to = "super::trail::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Trail,
    #[sea_orm(has_many = "super::visit_report::Entity")]
    VisitReport,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::park::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Park.def()
    }
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl Related<super::visit_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
