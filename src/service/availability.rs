//! The availability check: can a party of N visit this park or trail on
//! this date?
//!
//! The check is a pure read. Business obstacles (unknown park, past date,
//! full capacity) come back as an unavailable result with a reason rather
//! than an error, so the public availability endpoint can always answer
//! 200. The reservation service runs the same check on its transaction to
//! make the check-then-book sequence atomic.

use chrono::Utc;
use sea_orm::ConnectionTrait;

use crate::{
    data::{park::ParkRepository, reservation::ReservationRepository, trail::TrailRepository},
    error::AppError,
    model::availability::{Availability, CheckAvailabilityParams},
};

/// Occupancy share (percent) above which a booking gets a warning.
pub const HIGH_OCCUPANCY_THRESHOLD_PERCENT: i64 = 80;

pub struct AvailabilityService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the requested party fits on the requested date.
    ///
    /// # Returns
    /// - `Ok(Availability)`: The verdict, including vacancies and warnings
    /// - `Err(AppError)`: Database error only
    pub async fn check(&self, params: &CheckAvailabilityParams) -> Result<Availability, AppError> {
        self.check_excluding(params, None).await
    }

    /// Availability check that leaves one reservation out of the occupancy
    /// sum. Used when re-checking an update against its own booking.
    pub async fn check_excluding(
        &self,
        params: &CheckAvailabilityParams,
        exclude_reservation: Option<i32>,
    ) -> Result<Availability, AppError> {
        let park_repo = ParkRepository::new(self.db);
        let trail_repo = TrailRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        let park = match park_repo.get_by_id(params.park_id).await? {
            Some(park) if park.active => park,
            _ => {
                return Ok(Availability::unavailable(
                    "Park not found or not open for visits",
                    None,
                    None,
                ));
            }
        };

        // A trail booking is checked against the trail's own limit; a
        // whole-park booking against the park's.
        let capacity = match params.trail_id {
            Some(trail_id) => {
                let trail = match trail_repo.get_by_id(trail_id).await? {
                    Some(trail) if trail.park_id == park.id && trail.active => trail,
                    _ => {
                        return Ok(Availability::unavailable(
                            "Trail not found or not open for visits",
                            None,
                            None,
                        ));
                    }
                };
                trail.max_capacity
            }
            None => park.max_capacity,
        };

        if params.visit_date < Utc::now().date_naive() {
            return Ok(Availability::unavailable(
                "Visit date is in the past",
                None,
                None,
            ));
        }

        // A missing or non-positive limit means the scope is unbounded.
        let capacity = match capacity {
            Some(capacity) if capacity > 0 => capacity,
            _ => {
                return Ok(Availability {
                    available: true,
                    reason: None,
                    vacancies: None,
                    capacity: None,
                    warnings: Vec::new(),
                });
            }
        };

        let occupied = reservation_repo
            .visitors_on_date(
                params.park_id,
                params.trail_id,
                params.visit_date,
                exclude_reservation,
            )
            .await?;

        let vacancies = (i64::from(capacity) - occupied).max(0) as i32;

        if params.visitors > vacancies {
            return Ok(Availability::unavailable(
                format!("Only {} places remain on this date", vacancies),
                Some(vacancies),
                Some(capacity),
            ));
        }

        let mut warnings = Vec::new();
        let projected = occupied + i64::from(params.visitors);
        if projected * 100 >= i64::from(capacity) * HIGH_OCCUPANCY_THRESHOLD_PERCENT {
            warnings.push(format!(
                "High occupancy expected: {} of {} places would be taken",
                projected, capacity
            ));
        }

        Ok(Availability {
            available: true,
            reason: None,
            vacancies: Some(vacancies),
            capacity: Some(capacity),
            warnings,
        })
    }
}
