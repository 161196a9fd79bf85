//! The flora and fauna catalog.

use sea_orm::DatabaseConnection;

use crate::{
    data::{species::SpeciesRepository, trail::TrailRepository},
    error::AppError,
    model::species::{CreateSpeciesParams, Species, SpeciesFilter, UpdateSpeciesParams},
};

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new catalog entry.
    ///
    /// # Returns
    /// - `Ok(Species)`: The created entry
    /// - `Err(AppError::InvalidOperation)`: Common name already cataloged
    pub async fn create(&self, params: CreateSpeciesParams) -> Result<Species, AppError> {
        let species_repo = SpeciesRepository::new(self.db);

        if species_repo
            .get_by_common_name(&params.common_name)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidOperation(format!(
                "'{}' is already cataloged",
                params.common_name
            )));
        }

        let species = species_repo.create(params).await?;

        Species::from_entity(species)
    }

    pub async fn get(&self, id: i32) -> Result<Species, AppError> {
        let species = SpeciesRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Species not found".to_string()))?;

        Species::from_entity(species)
    }

    /// Searches the catalog by kind, category, and name substring.
    pub async fn search(&self, filter: SpeciesFilter) -> Result<Vec<Species>, AppError> {
        let entries = SpeciesRepository::new(self.db).get_filtered(filter).await?;

        entries.into_iter().map(Species::from_entity).collect()
    }

    /// Lists the species observable on one trail, as a field guide.
    pub async fn field_guide(&self, trail_id: i32) -> Result<Vec<Species>, AppError> {
        TrailRepository::new(self.db)
            .get_by_id(trail_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trail not found".to_string()))?;

        let entries = SpeciesRepository::new(self.db)
            .get_filtered(SpeciesFilter::default())
            .await?;

        let species: Result<Vec<Species>, AppError> =
            entries.into_iter().map(Species::from_entity).collect();

        Ok(species?
            .into_iter()
            .filter(|species| species.trail_ids.contains(&trail_id))
            .collect())
    }

    /// Updates an entry, re-checking common-name uniqueness when it changes.
    pub async fn update(&self, id: i32, params: UpdateSpeciesParams) -> Result<Species, AppError> {
        let species_repo = SpeciesRepository::new(self.db);

        let existing = species_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Species not found".to_string()))?;

        if let Some(new_name) = &params.common_name {
            if *new_name != existing.common_name
                && species_repo.get_by_common_name(new_name).await?.is_some()
            {
                return Err(AppError::InvalidOperation(format!(
                    "'{}' is already cataloged",
                    new_name
                )));
            }
        }

        let species = species_repo.update(id, params).await?;

        Species::from_entity(species)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let species_repo = SpeciesRepository::new(self.db);

        if species_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Species not found".to_string()));
        }

        species_repo.delete(id).await?;

        Ok(())
    }
}
