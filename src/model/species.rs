//! Domain models for the flora and fauna catalog.

use entity::species::SpeciesKind;

use crate::error::AppError;

/// A species in the park system's field catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    /// Unique identifier for the species.
    pub id: i32,
    /// Latin name, when known.
    pub scientific_name: Option<String>,
    /// Unique common name shown to visitors.
    pub common_name: String,
    /// Whether the entry is fauna or flora.
    pub kind: SpeciesKind,
    /// Free-form grouping such as "bird" or "conifer".
    pub category: Option<String>,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Trails where the species can be observed.
    pub trail_ids: Vec<i32>,
}

impl Species {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The trail list is stored as a JSON array; a malformed document is
    /// treated as a data error rather than silently dropped.
    pub fn from_entity(entity: entity::species::Model) -> Result<Self, AppError> {
        let trail_ids = match entity.trail_ids {
            Some(json) => serde_json::from_value(json).map_err(|e| {
                AppError::InternalError(format!(
                    "Malformed trail_ids for species {}: {}",
                    entity.id, e
                ))
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            scientific_name: entity.scientific_name,
            common_name: entity.common_name,
            kind: entity.kind,
            category: entity.category,
            description: entity.description,
            trail_ids,
        })
    }
}

/// Parameters for creating a new species entry.
#[derive(Debug, Clone)]
pub struct CreateSpeciesParams {
    pub scientific_name: Option<String>,
    pub common_name: String,
    pub kind: SpeciesKind,
    pub category: Option<String>,
    pub description: Option<String>,
    pub trail_ids: Vec<i32>,
}

/// Parameters for updating an existing species entry.
///
/// All fields are optional - only provided fields will be updated. The
/// trail list, if provided, completely replaces the existing one.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpeciesParams {
    pub scientific_name: Option<Option<String>>,
    pub common_name: Option<String>,
    pub kind: Option<SpeciesKind>,
    pub category: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub trail_ids: Option<Vec<i32>>,
}

/// Filter for species catalog queries.
///
/// Fields are combined with AND; `None` leaves that dimension unfiltered.
#[derive(Debug, Clone, Default)]
pub struct SpeciesFilter {
    pub kind: Option<SpeciesKind>,
    pub category: Option<String>,
    /// Case-insensitive substring match on common and scientific names.
    pub query: Option<String>,
}
