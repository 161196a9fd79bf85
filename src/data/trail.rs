use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::trail::{CreateTrailParams, TrailFilter, UpdateTrailParams};

pub struct TrailRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new trail. New trails start active.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created trail
    /// - `Err(DbErr)`: Database error (including per-park unique name violations)
    pub async fn create(&self, params: CreateTrailParams) -> Result<entity::trail::Model, DbErr> {
        entity::trail::ActiveModel {
            id: ActiveValue::NotSet,
            park_id: ActiveValue::Set(params.park_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            difficulty: ActiveValue::Set(params.difficulty),
            distance_km: ActiveValue::Set(params.distance_km),
            estimated_minutes: ActiveValue::Set(params.estimated_minutes),
            max_capacity: ActiveValue::Set(params.max_capacity),
            active: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::trail::Model>, DbErr> {
        entity::prelude::Trail::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_park_and_name(
        &self,
        park_id: i32,
        name: &str,
    ) -> Result<Option<entity::trail::Model>, DbErr> {
        entity::prelude::Trail::find()
            .filter(entity::trail::Column::ParkId.eq(park_id))
            .filter(entity::trail::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists trails of a park matching a filter, ordered by name.
    ///
    /// # Arguments
    /// - `park_id`: Owning park
    /// - `filter`: Name, difficulty, and active-only restrictions
    pub async fn get_by_park(
        &self,
        park_id: i32,
        filter: TrailFilter,
    ) -> Result<Vec<entity::trail::Model>, DbErr> {
        let mut query =
            entity::prelude::Trail::find().filter(entity::trail::Column::ParkId.eq(park_id));

        if let Some(name) = filter.name {
            query = query.filter(entity::trail::Column::Name.contains(&name));
        }
        if let Some(difficulty) = filter.difficulty {
            query = query.filter(entity::trail::Column::Difficulty.eq(difficulty));
        }
        if filter.active_only {
            query = query.filter(entity::trail::Column::Active.eq(true));
        }

        query
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a trail
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated trail
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTrailParams,
    ) -> Result<entity::trail::Model, DbErr> {
        let trail = entity::prelude::Trail::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Trail {} not found", id)))?;

        let mut active_model: entity::trail::ActiveModel = trail.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(difficulty) = params.difficulty {
            active_model.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(distance_km) = params.distance_km {
            active_model.distance_km = ActiveValue::Set(distance_km);
        }
        if let Some(estimated_minutes) = params.estimated_minutes {
            active_model.estimated_minutes = ActiveValue::Set(estimated_minutes);
        }
        if let Some(max_capacity) = params.max_capacity {
            active_model.max_capacity = ActiveValue::Set(max_capacity);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Trail::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
