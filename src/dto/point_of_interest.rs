//! Point-of-interest request and response bodies.

use entity::point_of_interest::PoiKind;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::point_of_interest::{
        CreatePointOfInterestParams, PointOfInterest, UpdatePointOfInterestParams,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterestDto {
    pub id: i32,
    pub trail_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<PoiKind>,
    pub trail_order: Option<i32>,
}

impl From<PointOfInterest> for PointOfInterestDto {
    fn from(poi: PointOfInterest) -> Self {
        Self {
            id: poi.id,
            trail_id: poi.trail_id,
            name: poi.name,
            description: poi.description,
            kind: poi.kind,
            trail_order: poi.trail_order,
        }
    }
}

/// Body of `POST /api/trails/{trail_id}/pois`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePointOfInterestDto {
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<PoiKind>,
    /// Position along the trail. Absent appends after the last point.
    pub trail_order: Option<i32>,
}

impl CreatePointOfInterestDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Point name must not be empty".to_string(),
            ));
        }
        if matches!(self.trail_order, Some(order) if order < 1) {
            return Err(AppError::BadRequest(
                "Trail order must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_params(self, trail_id: i32) -> CreatePointOfInterestParams {
        CreatePointOfInterestParams {
            trail_id,
            name: self.name,
            description: self.description,
            kind: self.kind,
            trail_order: self.trail_order,
        }
    }
}

/// Body of `PUT /api/pois/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePointOfInterestDto {
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<PoiKind>,
    pub trail_order: Option<i32>,
}

impl UpdatePointOfInterestDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Point name must not be empty".to_string(),
            ));
        }
        if matches!(self.trail_order, Some(order) if order < 1) {
            return Err(AppError::BadRequest(
                "Trail order must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_params(self) -> UpdatePointOfInterestParams {
        UpdatePointOfInterestParams {
            name: Some(self.name),
            description: Some(self.description),
            kind: Some(self.kind),
            trail_order: Some(self.trail_order),
        }
    }
}

/// Body of `PUT /api/trails/{trail_id}/pois/order`.
///
/// Carries every point id of the trail in the desired walking order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderPointsDto {
    pub ordered_ids: Vec<i32>,
}
