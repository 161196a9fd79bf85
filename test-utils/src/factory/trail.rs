//! Trail factory for creating test trail entities.

use crate::factory::helpers::next_id;
use entity::trail::TrailDifficulty;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trails with customizable fields.
///
/// Defaults give a bounded trail (capacity 20) matching the worked example
/// in the availability tests; use `.max_capacity(None)` for unbounded.
pub struct TrailFactory<'a> {
    db: &'a DatabaseConnection,
    park_id: i32,
    name: String,
    difficulty: Option<TrailDifficulty>,
    distance_km: Option<f64>,
    estimated_minutes: Option<i32>,
    max_capacity: Option<i32>,
    active: bool,
}

impl<'a> TrailFactory<'a> {
    /// Creates a new TrailFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Trail {id}"` where id is auto-incremented
    /// - difficulty: `Some(TrailDifficulty::Moderate)`
    /// - distance_km: `Some(5.0)`
    /// - estimated_minutes: `Some(120)`
    /// - max_capacity: `Some(20)`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, park_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            park_id,
            name: format!("Trail {}", id),
            difficulty: Some(TrailDifficulty::Moderate),
            distance_km: Some(5.0),
            estimated_minutes: Some(120),
            max_capacity: Some(20),
            active: true,
        }
    }

    /// Sets the trail name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the difficulty grade.
    pub fn difficulty(mut self, difficulty: Option<TrailDifficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the daily visitor capacity (`None` = unbounded).
    pub fn max_capacity(mut self, max_capacity: Option<i32>) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets whether the trail is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the trail entity into the database.
    pub async fn build(self) -> Result<entity::trail::Model, DbErr> {
        entity::trail::ActiveModel {
            id: ActiveValue::NotSet,
            park_id: ActiveValue::Set(self.park_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            difficulty: ActiveValue::Set(self.difficulty),
            distance_km: ActiveValue::Set(self.distance_km),
            estimated_minutes: ActiveValue::Set(self.estimated_minutes),
            max_capacity: ActiveValue::Set(self.max_capacity),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trail with default values for the specified park.
///
/// Shorthand for `TrailFactory::new(db, park_id).build().await`.
pub async fn create_trail(
    db: &DatabaseConnection,
    park_id: i32,
) -> Result<entity::trail::Model, DbErr> {
    TrailFactory::new(db, park_id).build().await
}
