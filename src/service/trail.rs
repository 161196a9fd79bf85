//! Trail management and per-date trail availability.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{park::ParkRepository, reservation::ReservationRepository, trail::TrailRepository},
    error::AppError,
    model::trail::{CreateTrailParams, Trail, TrailAvailability, TrailFilter, UpdateTrailParams},
};

pub struct TrailService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new trail inside a park.
    ///
    /// # Returns
    /// - `Ok(Trail)`: The created trail
    /// - `Err(AppError::NotFound)`: Park does not exist
    /// - `Err(AppError::InvalidOperation)`: Name already used within the park
    pub async fn create(&self, params: CreateTrailParams) -> Result<Trail, AppError> {
        let trail_repo = TrailRepository::new(self.db);

        ParkRepository::new(self.db)
            .get_by_id(params.park_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        if trail_repo
            .get_by_park_and_name(params.park_id, &params.name)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidOperation(format!(
                "A trail named '{}' already exists in this park",
                params.name
            )));
        }

        let trail = trail_repo.create(params).await?;

        Ok(Trail::from_entity(trail))
    }

    pub async fn get(&self, id: i32) -> Result<Trail, AppError> {
        let trail = TrailRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        Ok(Trail::from_entity(trail))
    }

    /// Lists the trails of a park matching a filter.
    pub async fn list_by_park(
        &self,
        park_id: i32,
        filter: TrailFilter,
    ) -> Result<Vec<Trail>, AppError> {
        ParkRepository::new(self.db)
            .get_by_id(park_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        let trails = TrailRepository::new(self.db)
            .get_by_park(park_id, filter)
            .await?;

        Ok(trails.into_iter().map(Trail::from_entity).collect())
    }

    /// Lists the active trails of a park with their booking load on a date.
    ///
    /// Unbounded trails report `vacancies: None` and are always bookable.
    pub async fn available_on(
        &self,
        park_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<TrailAvailability>, AppError> {
        ParkRepository::new(self.db)
            .get_by_id(park_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        let trails = TrailRepository::new(self.db)
            .get_by_park(
                park_id,
                TrailFilter {
                    active_only: true,
                    ..Default::default()
                },
            )
            .await?;
        let reservation_repo = ReservationRepository::new(self.db);

        let mut availabilities = Vec::with_capacity(trails.len());
        for trail in trails {
            let occupied = reservation_repo
                .visitors_on_date(park_id, Some(trail.id), date, None)
                .await?;

            let vacancies = match trail.max_capacity {
                Some(capacity) if capacity > 0 => {
                    Some((i64::from(capacity) - occupied).max(0) as i32)
                }
                _ => None,
            };

            availabilities.push(TrailAvailability {
                trail: Trail::from_entity(trail),
                occupied,
                vacancies,
            });
        }

        Ok(availabilities)
    }

    /// Updates a trail, re-checking per-park name uniqueness when the name
    /// changes.
    pub async fn update(&self, id: i32, params: UpdateTrailParams) -> Result<Trail, AppError> {
        let trail_repo = TrailRepository::new(self.db);

        let existing = trail_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        if let Some(new_name) = &params.name {
            if *new_name != existing.name
                && trail_repo
                    .get_by_park_and_name(existing.park_id, new_name)
                    .await?
                    .is_some()
            {
                return Err(AppError::InvalidOperation(format!(
                    "A trail named '{}' already exists in this park",
                    new_name
                )));
            }
        }

        let trail = trail_repo.update(id, params).await?;

        Ok(Trail::from_entity(trail))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let trail_repo = TrailRepository::new(self.db);

        if trail_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Trail not found".to_string()));
        }

        trail_repo.delete(id).await?;

        Ok(())
    }
}
