//! Point-of-interest factory for creating test POI entities.

use crate::factory::helpers::next_id;
use entity::point_of_interest::PoiKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test points of interest with customizable fields.
pub struct PointOfInterestFactory<'a> {
    db: &'a DatabaseConnection,
    trail_id: i32,
    name: String,
    kind: Option<PoiKind>,
    trail_order: Option<i32>,
}

impl<'a> PointOfInterestFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Point {id}"` where id is auto-incremented
    /// - kind: `Some(PoiKind::Viewpoint)`
    /// - trail_order: `Some(1)`
    pub fn new(db: &'a DatabaseConnection, trail_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            trail_id,
            name: format!("Point {}", id),
            kind: Some(PoiKind::Viewpoint),
            trail_order: Some(1),
        }
    }

    /// Sets the point name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the point kind.
    pub fn kind(mut self, kind: Option<PoiKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the 1-based position along the trail.
    pub fn trail_order(mut self, trail_order: Option<i32>) -> Self {
        self.trail_order = trail_order;
        self
    }

    /// Builds and inserts the point-of-interest entity into the database.
    pub async fn build(self) -> Result<entity::point_of_interest::Model, DbErr> {
        entity::point_of_interest::ActiveModel {
            id: ActiveValue::NotSet,
            trail_id: ActiveValue::Set(self.trail_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            trail_order: ActiveValue::Set(self.trail_order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a point of interest with default values on the given trail.
pub async fn create_point_of_interest(
    db: &DatabaseConnection,
    trail_id: i32,
) -> Result<entity::point_of_interest::Model, DbErr> {
    PointOfInterestFactory::new(db, trail_id).build().await
}
