//! Park management.

use sea_orm::DatabaseConnection;

use crate::{
    data::park::ParkRepository,
    error::AppError,
    model::park::{CreateParkParams, Park, UpdateParkParams},
};

pub struct ParkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new park.
    ///
    /// # Returns
    /// - `Ok(Park)`: The created park
    /// - `Err(AppError::InvalidOperation)`: A park with this name already exists
    pub async fn create(&self, params: CreateParkParams) -> Result<Park, AppError> {
        let park_repo = ParkRepository::new(self.db);

        if park_repo.get_by_name(&params.name).await?.is_some() {
            return Err(AppError::InvalidOperation(format!(
                "A park named '{}' already exists",
                params.name
            )));
        }

        let park = park_repo.create(params).await?;

        Ok(Park::from_entity(park))
    }

    pub async fn get(&self, id: i32) -> Result<Park, AppError> {
        let park = ParkRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        Ok(Park::from_entity(park))
    }

    /// Lists parks, optionally restricted to active ones and to names
    /// containing a search term.
    pub async fn list(
        &self,
        active_only: bool,
        name: Option<String>,
    ) -> Result<Vec<Park>, AppError> {
        let parks = ParkRepository::new(self.db)
            .get_all(active_only, name.as_deref())
            .await?;

        Ok(parks.into_iter().map(Park::from_entity).collect())
    }

    /// Updates a park, re-checking name uniqueness when the name changes.
    pub async fn update(&self, id: i32, params: UpdateParkParams) -> Result<Park, AppError> {
        let park_repo = ParkRepository::new(self.db);

        let existing = park_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        if let Some(new_name) = &params.name {
            if *new_name != existing.name && park_repo.get_by_name(new_name).await?.is_some() {
                return Err(AppError::InvalidOperation(format!(
                    "A park named '{}' already exists",
                    new_name
                )));
            }
        }

        let park = park_repo.update(id, params).await?;

        Ok(Park::from_entity(park))
    }

    /// Deletes a park and, through cascade, its trails and reservations.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let park_repo = ParkRepository::new(self.db);

        if park_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Park not found".to_string()));
        }

        park_repo.delete(id).await?;

        Ok(())
    }
}
