//! Points of interest along trails, including walking-order maintenance.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    data::{point_of_interest::PointOfInterestRepository, trail::TrailRepository},
    error::AppError,
    model::point_of_interest::{
        CreatePointOfInterestParams, PointOfInterest, UpdatePointOfInterestParams,
    },
};

pub struct PointOfInterestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointOfInterestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new point of interest on a trail.
    ///
    /// A point created without an explicit position is appended after the
    /// trail's current last point.
    ///
    /// # Returns
    /// - `Ok(PointOfInterest)`: The created point
    /// - `Err(AppError::NotFound)`: Trail does not exist
    /// - `Err(AppError::InvalidOperation)`: Name already used on the trail
    pub async fn create(
        &self,
        mut params: CreatePointOfInterestParams,
    ) -> Result<PointOfInterest, AppError> {
        let poi_repo = PointOfInterestRepository::new(self.db);

        TrailRepository::new(self.db)
            .get_by_id(params.trail_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        if poi_repo
            .get_by_trail_and_name(params.trail_id, &params.name)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidOperation(format!(
                "A point named '{}' already exists on this trail",
                params.name
            )));
        }

        if params.trail_order.is_none() {
            let max = poi_repo.max_order(params.trail_id).await?;
            params.trail_order = Some(max.unwrap_or(0) + 1);
        }

        let point = poi_repo.create(params).await?;

        Ok(PointOfInterest::from_entity(point))
    }

    pub async fn get(&self, id: i32) -> Result<PointOfInterest, AppError> {
        let point = PointOfInterestRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Point of interest not found".to_string()))?;

        Ok(PointOfInterest::from_entity(point))
    }

    /// Lists the points of a trail in walking order.
    pub async fn list_by_trail(&self, trail_id: i32) -> Result<Vec<PointOfInterest>, AppError> {
        TrailRepository::new(self.db)
            .get_by_id(trail_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        let points = PointOfInterestRepository::new(self.db)
            .get_by_trail(trail_id)
            .await?;

        Ok(points
            .into_iter()
            .map(PointOfInterest::from_entity)
            .collect())
    }

    /// Updates a point, re-checking per-trail name uniqueness when the name
    /// changes.
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePointOfInterestParams,
    ) -> Result<PointOfInterest, AppError> {
        let poi_repo = PointOfInterestRepository::new(self.db);

        let existing = poi_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Point of interest not found".to_string()))?;

        if let Some(new_name) = &params.name {
            if *new_name != existing.name
                && poi_repo
                    .get_by_trail_and_name(existing.trail_id, new_name)
                    .await?
                    .is_some()
            {
                return Err(AppError::InvalidOperation(format!(
                    "A point named '{}' already exists on this trail",
                    new_name
                )));
            }
        }

        let point = poi_repo.update(id, params).await?;

        Ok(PointOfInterest::from_entity(point))
    }

    /// Rewrites the walking order of a trail's points.
    ///
    /// The submitted list must contain exactly the ids of the trail's
    /// points; positions are assigned 1-based in list order.
    pub async fn reorder(
        &self,
        trail_id: i32,
        ordered_ids: Vec<i32>,
    ) -> Result<Vec<PointOfInterest>, AppError> {
        let poi_repo = PointOfInterestRepository::new(self.db);

        TrailRepository::new(self.db)
            .get_by_id(trail_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        let points = poi_repo.get_by_trail(trail_id).await?;

        let existing_ids: HashSet<i32> = points.iter().map(|point| point.id).collect();
        let submitted_ids: HashSet<i32> = ordered_ids.iter().copied().collect();

        if submitted_ids.len() != ordered_ids.len() || submitted_ids != existing_ids {
            return Err(AppError::BadRequest(
                "Ordered ids must contain each point of the trail exactly once".to_string(),
            ));
        }

        for (position, point_id) in ordered_ids.iter().enumerate() {
            poi_repo.set_order(*point_id, position as i32 + 1).await?;
        }

        self.list_by_trail(trail_id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let poi_repo = PointOfInterestRepository::new(self.db);

        if poi_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(
                "Point of interest not found".to_string(),
            ));
        }

        poi_repo.delete(id).await?;

        Ok(())
    }
}
