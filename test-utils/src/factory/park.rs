//! Park factory for creating test park entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parks with customizable fields.
///
/// Defaults give a bounded park (capacity 100) so capacity tests behave
/// deterministically; use `.max_capacity(None)` for an unbounded park.
pub struct ParkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    max_capacity: Option<i32>,
    active: bool,
}

impl<'a> ParkFactory<'a> {
    /// Creates a new ParkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Park {id}"` where id is auto-incremented
    /// - max_capacity: `Some(100)`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Park {}", id),
            max_capacity: Some(100),
            active: true,
        }
    }

    /// Sets the park name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily visitor capacity (`None` = unbounded).
    pub fn max_capacity(mut self, max_capacity: Option<i32>) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets whether the park is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the park entity into the database.
    pub async fn build(self) -> Result<entity::park::Model, DbErr> {
        entity::park::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(Some("Test park description".to_string())),
            address: ActiveValue::Set(None),
            max_capacity: ActiveValue::Set(self.max_capacity),
            opening_hours: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a park with default values.
///
/// Shorthand for `ParkFactory::new(db).build().await`.
pub async fn create_park(db: &DatabaseConnection) -> Result<entity::park::Model, DbErr> {
    ParkFactory::new(db).build().await
}
