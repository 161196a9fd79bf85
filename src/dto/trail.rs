//! Trail request and response bodies.

use entity::trail::TrailDifficulty;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::trail::{CreateTrailParams, Trail, TrailAvailability, UpdateTrailParams},
};

/// Largest daily visitor limit a single trail may declare.
pub const MAX_TRAIL_CAPACITY: i32 = 500;

fn validate_capacity(max_capacity: Option<i32>) -> Result<(), AppError> {
    if let Some(capacity) = max_capacity {
        if !(1..=MAX_TRAIL_CAPACITY).contains(&capacity) {
            return Err(AppError::BadRequest(format!(
                "Trail capacity must be between 1 and {}",
                MAX_TRAIL_CAPACITY
            )));
        }
    }
    Ok(())
}

fn validate_distance(distance_km: Option<f64>) -> Result<(), AppError> {
    if let Some(distance) = distance_km {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(AppError::BadRequest(
                "Trail distance must be a positive number".to_string(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailDto {
    pub id: i32,
    pub park_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    /// `null` means the trail has no daily visitor limit.
    pub max_capacity: Option<i32>,
    pub active: bool,
}

impl From<Trail> for TrailDto {
    fn from(trail: Trail) -> Self {
        Self {
            id: trail.id,
            park_id: trail.park_id,
            name: trail.name,
            description: trail.description,
            difficulty: trail.difficulty,
            distance_km: trail.distance_km,
            estimated_minutes: trail.estimated_minutes,
            max_capacity: trail.max_capacity,
            active: trail.active,
        }
    }
}

/// One trail in the daily availability listing.
#[derive(Debug, Clone, Serialize)]
pub struct TrailAvailabilityDto {
    #[serde(flatten)]
    pub trail: TrailDto,
    /// Visitors already booked for the requested date.
    pub occupied: i64,
    /// Places remaining. `null` means unbounded.
    pub vacancies: Option<i32>,
}

impl From<TrailAvailability> for TrailAvailabilityDto {
    fn from(availability: TrailAvailability) -> Self {
        Self {
            trail: availability.trail.into(),
            occupied: availability.occupied,
            vacancies: availability.vacancies,
        }
    }
}

/// Body of `POST /api/parks/{park_id}/trails`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrailDto {
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub max_capacity: Option<i32>,
}

impl CreateTrailDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Trail name must not be empty".to_string(),
            ));
        }
        validate_capacity(self.max_capacity)?;
        validate_distance(self.distance_km)
    }

    pub fn into_params(self, park_id: i32) -> CreateTrailParams {
        CreateTrailParams {
            park_id,
            name: self.name,
            description: self.description,
            difficulty: self.difficulty,
            distance_km: self.distance_km,
            estimated_minutes: self.estimated_minutes,
            max_capacity: self.max_capacity,
        }
    }
}

/// Body of `PUT /api/trails/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrailDto {
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub max_capacity: Option<i32>,
    pub active: bool,
}

impl UpdateTrailDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Trail name must not be empty".to_string(),
            ));
        }
        validate_capacity(self.max_capacity)?;
        validate_distance(self.distance_km)
    }

    pub fn into_params(self) -> UpdateTrailParams {
        UpdateTrailParams {
            name: Some(self.name),
            description: Some(self.description),
            difficulty: Some(self.difficulty),
            distance_km: Some(self.distance_km),
            estimated_minutes: Some(self.estimated_minutes),
            max_capacity: Some(self.max_capacity),
            active: Some(self.active),
        }
    }
}
