//! Species catalog request and response bodies.

use entity::species::SpeciesKind;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::species::{CreateSpeciesParams, Species, SpeciesFilter, UpdateSpeciesParams},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDto {
    pub id: i32,
    pub scientific_name: Option<String>,
    pub common_name: String,
    pub kind: SpeciesKind,
    pub category: Option<String>,
    pub description: Option<String>,
    pub trail_ids: Vec<i32>,
}

impl From<Species> for SpeciesDto {
    fn from(species: Species) -> Self {
        Self {
            id: species.id,
            scientific_name: species.scientific_name,
            common_name: species.common_name,
            kind: species.kind,
            category: species.category,
            description: species.description,
            trail_ids: species.trail_ids,
        }
    }
}

/// Body of `POST /api/species`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpeciesDto {
    pub scientific_name: Option<String>,
    pub common_name: String,
    pub kind: SpeciesKind,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub trail_ids: Vec<i32>,
}

impl CreateSpeciesDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.common_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Common name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_params(self) -> CreateSpeciesParams {
        CreateSpeciesParams {
            scientific_name: self.scientific_name,
            common_name: self.common_name,
            kind: self.kind,
            category: self.category,
            description: self.description,
            trail_ids: self.trail_ids,
        }
    }
}

/// Body of `PUT /api/species/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSpeciesDto {
    pub scientific_name: Option<String>,
    pub common_name: String,
    pub kind: SpeciesKind,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub trail_ids: Vec<i32>,
}

impl UpdateSpeciesDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.common_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Common name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_params(self) -> UpdateSpeciesParams {
        UpdateSpeciesParams {
            scientific_name: Some(self.scientific_name),
            common_name: Some(self.common_name),
            kind: Some(self.kind),
            category: Some(self.category),
            description: Some(self.description),
            trail_ids: Some(self.trail_ids),
        }
    }
}

/// Query parameters of `GET /api/species`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesQuery {
    pub kind: Option<SpeciesKind>,
    pub category: Option<String>,
    /// Case-insensitive substring match on common and scientific names.
    pub q: Option<String>,
}

impl SpeciesQuery {
    pub fn into_filter(self) -> SpeciesFilter {
        SpeciesFilter {
            kind: self.kind,
            category: self.category,
            query: self.q,
        }
    }
}
