use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::species::{CreateSpeciesParams, SpeciesFilter, UpdateSpeciesParams};

fn trail_ids_to_json(trail_ids: Vec<i32>) -> Option<sea_orm::JsonValue> {
    if trail_ids.is_empty() {
        None
    } else {
        Some(serde_json::json!(trail_ids))
    }
}

pub struct SpeciesRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new species entry
    ///
    /// # Returns
    /// - `Ok(Model)`: The created species
    /// - `Err(DbErr)`: Database error (including unique common name violations)
    pub async fn create(
        &self,
        params: CreateSpeciesParams,
    ) -> Result<entity::species::Model, DbErr> {
        entity::species::ActiveModel {
            id: ActiveValue::NotSet,
            scientific_name: ActiveValue::Set(params.scientific_name),
            common_name: ActiveValue::Set(params.common_name),
            kind: ActiveValue::Set(params.kind),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            trail_ids: ActiveValue::Set(trail_ids_to_json(params.trail_ids)),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::species::Model>, DbErr> {
        entity::prelude::Species::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_common_name(
        &self,
        common_name: &str,
    ) -> Result<Option<entity::species::Model>, DbErr> {
        entity::prelude::Species::find()
            .filter(entity::species::Column::CommonName.eq(common_name))
            .one(self.db)
            .await
    }

    /// Lists catalog entries matching a filter, ordered by common name.
    ///
    /// The name query matches case-insensitively against both the common
    /// and the scientific name.
    pub async fn get_filtered(
        &self,
        filter: SpeciesFilter,
    ) -> Result<Vec<entity::species::Model>, DbErr> {
        let mut query = entity::prelude::Species::find();

        if let Some(kind) = filter.kind {
            query = query.filter(entity::species::Column::Kind.eq(kind));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::species::Column::Category.eq(category));
        }
        if let Some(name_query) = filter.query {
            let pattern = format!("%{}%", name_query.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(entity::species::Column::CommonName.contains(&name_query))
                    .add(entity::species::Column::ScientificName.like(&pattern)),
            );
        }

        query
            .order_by_asc(entity::species::Column::CommonName)
            .all(self.db)
            .await
    }

    /// Updates a species entry
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated species
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateSpeciesParams,
    ) -> Result<entity::species::Model, DbErr> {
        let species = entity::prelude::Species::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Species {} not found", id)))?;

        let mut active_model: entity::species::ActiveModel = species.into();

        if let Some(scientific_name) = params.scientific_name {
            active_model.scientific_name = ActiveValue::Set(scientific_name);
        }
        if let Some(common_name) = params.common_name {
            active_model.common_name = ActiveValue::Set(common_name);
        }
        if let Some(kind) = params.kind {
            active_model.kind = ActiveValue::Set(kind);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(trail_ids) = params.trail_ids {
            active_model.trail_ids = ActiveValue::Set(trail_ids_to_json(trail_ids));
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Species::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
