//! Species factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use entity::species::SpeciesKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test species entries with customizable fields.
pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    common_name: String,
    scientific_name: Option<String>,
    kind: SpeciesKind,
    category: Option<String>,
    trail_ids: Option<Vec<i32>>,
}

impl<'a> SpeciesFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - common_name: `"Species {id}"` where id is auto-incremented
    /// - scientific_name: `None`
    /// - kind: `SpeciesKind::Fauna`
    /// - category: `None`
    /// - trail_ids: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            common_name: format!("Species {}", id),
            scientific_name: None,
            kind: SpeciesKind::Fauna,
            category: None,
            trail_ids: None,
        }
    }

    /// Sets the common (popular) name.
    pub fn common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = common_name.into();
        self
    }

    /// Sets the scientific name.
    pub fn scientific_name(mut self, scientific_name: Option<String>) -> Self {
        self.scientific_name = scientific_name;
        self
    }

    /// Sets whether the entry is fauna or flora.
    pub fn kind(mut self, kind: SpeciesKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the category label.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Sets the trails where the species can be observed.
    pub fn trail_ids(mut self, trail_ids: Option<Vec<i32>>) -> Self {
        self.trail_ids = trail_ids;
        self
    }

    /// Builds and inserts the species entity into the database.
    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        let trail_ids = self.trail_ids.map(|ids| serde_json::json!(ids));

        entity::species::ActiveModel {
            id: ActiveValue::NotSet,
            scientific_name: ActiveValue::Set(self.scientific_name),
            common_name: ActiveValue::Set(self.common_name),
            kind: ActiveValue::Set(self.kind),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(None),
            trail_ids: ActiveValue::Set(trail_ids),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a species entry with default values.
pub async fn create_species(db: &DatabaseConnection) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db).build().await
}
