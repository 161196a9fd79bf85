//! Availability check request and response bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::availability::{Availability, CheckAvailabilityParams},
};

/// Query parameters of `GET /api/availability`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub park_id: i32,
    pub trail_id: Option<i32>,
    pub date: NaiveDate,
    /// Party size to test the date against. Defaults to one visitor.
    #[serde(default = "default_visitors")]
    pub visitors: i32,
}

fn default_visitors() -> i32 {
    1
}

impl AvailabilityQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.visitors < 1 {
            return Err(AppError::BadRequest(
                "Party size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_params(self) -> CheckAvailabilityParams {
        CheckAvailabilityParams {
            park_id: self.park_id,
            trail_id: self.trail_id,
            visit_date: self.date,
            visitors: self.visitors,
        }
    }
}

/// Result of an availability check. Always returned with status 200; an
/// unbookable date is expressed through `available: false` and `reason`.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityDto {
    pub available: bool,
    pub reason: Option<String>,
    /// Places remaining on the date. `null` means unbounded.
    pub vacancies: Option<i32>,
    /// Daily limit of the requested scope. `null` means unbounded.
    pub capacity: Option<i32>,
    pub warnings: Vec<String>,
}

impl From<Availability> for AvailabilityDto {
    fn from(availability: Availability) -> Self {
        Self {
            available: availability.available,
            reason: availability.reason,
            vacancies: availability.vacancies,
            capacity: availability.capacity,
            warnings: availability.warnings,
        }
    }
}
