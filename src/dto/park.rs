//! Park request and response bodies.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::park::{CreateParkParams, Park, UpdateParkParams},
};

/// Largest daily visitor limit a park may declare.
pub const MAX_PARK_CAPACITY: i32 = 10_000;

fn validate_capacity(max_capacity: Option<i32>) -> Result<(), AppError> {
    if let Some(capacity) = max_capacity {
        if !(1..=MAX_PARK_CAPACITY).contains(&capacity) {
            return Err(AppError::BadRequest(format!(
                "Park capacity must be between 1 and {}",
                MAX_PARK_CAPACITY
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    /// `null` means the park has no daily visitor limit.
    pub max_capacity: Option<i32>,
    pub opening_hours: Option<String>,
    pub active: bool,
}

impl From<Park> for ParkDto {
    fn from(park: Park) -> Self {
        Self {
            id: park.id,
            name: park.name,
            description: park.description,
            address: park.address,
            max_capacity: park.max_capacity,
            opening_hours: park.opening_hours,
            active: park.active,
        }
    }
}

/// Body of `POST /api/parks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParkDto {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub max_capacity: Option<i32>,
    pub opening_hours: Option<String>,
}

impl CreateParkDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Park name must not be empty".to_string(),
            ));
        }
        validate_capacity(self.max_capacity)
    }

    pub fn into_params(self) -> CreateParkParams {
        CreateParkParams {
            name: self.name,
            description: self.description,
            address: self.address,
            max_capacity: self.max_capacity,
            opening_hours: self.opening_hours,
        }
    }
}

/// Body of `PUT /api/parks/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateParkDto {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub max_capacity: Option<i32>,
    pub opening_hours: Option<String>,
    pub active: bool,
}

impl UpdateParkDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Park name must not be empty".to_string(),
            ));
        }
        validate_capacity(self.max_capacity)
    }

    pub fn into_params(self) -> UpdateParkParams {
        UpdateParkParams {
            name: Some(self.name),
            description: Some(self.description),
            address: Some(self.address),
            max_capacity: Some(self.max_capacity),
            opening_hours: Some(self.opening_hours),
            active: Some(self.active),
        }
    }
}
