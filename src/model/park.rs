//! Domain models for natural parks.

/// A natural park that visitors can book.
#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    /// Unique identifier for the park.
    pub id: i32,
    /// Unique park name.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Optional postal address of the main entrance.
    pub address: Option<String>,
    /// Daily visitor limit across the whole park. `None` means unbounded.
    pub max_capacity: Option<i32>,
    /// Opening hours as a JSON document (per-weekday ranges).
    pub opening_hours: Option<String>,
    /// Whether the park currently accepts visits.
    pub active: bool,
}

impl Park {
    /// Converts an entity model to a park domain model at the repository boundary.
    pub fn from_entity(entity: entity::park::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            max_capacity: entity.max_capacity,
            opening_hours: entity.opening_hours,
            active: entity.active,
        }
    }
}

/// Parameters for creating a new park.
#[derive(Debug, Clone)]
pub struct CreateParkParams {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub max_capacity: Option<i32>,
    pub opening_hours: Option<String>,
}

/// Parameters for updating an existing park.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateParkParams {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub max_capacity: Option<Option<i32>>,
    pub opening_hours: Option<Option<String>>,
    pub active: Option<bool>,
}
