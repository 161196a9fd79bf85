use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::park::{CreateParkParams, UpdateParkParams};

pub struct ParkRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new park. New parks start active.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created park
    /// - `Err(DbErr)`: Database error (including unique name violations)
    pub async fn create(&self, params: CreateParkParams) -> Result<entity::park::Model, DbErr> {
        entity::park::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            address: ActiveValue::Set(params.address),
            max_capacity: ActiveValue::Set(params.max_capacity),
            opening_hours: ActiveValue::Set(params.opening_hours),
            active: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::park::Model>, DbErr> {
        entity::prelude::Park::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::park::Model>, DbErr> {
        entity::prelude::Park::find()
            .filter(entity::park::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists parks ordered by name.
    ///
    /// # Arguments
    /// - `active_only`: When true, deactivated parks are omitted
    /// - `name`: Substring to match against park names
    pub async fn get_all(
        &self,
        active_only: bool,
        name: Option<&str>,
    ) -> Result<Vec<entity::park::Model>, DbErr> {
        let mut query = entity::prelude::Park::find();

        if active_only {
            query = query.filter(entity::park::Column::Active.eq(true));
        }
        if let Some(name) = name {
            query = query.filter(entity::park::Column::Name.contains(name));
        }

        query
            .order_by_asc(entity::park::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a park
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated park
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateParkParams,
    ) -> Result<entity::park::Model, DbErr> {
        let park = entity::prelude::Park::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Park {} not found", id)))?;

        let mut active_model: entity::park::ActiveModel = park.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(max_capacity) = params.max_capacity {
            active_model.max_capacity = ActiveValue::Set(max_capacity);
        }
        if let Some(opening_hours) = params.opening_hours {
            active_model.opening_hours = ActiveValue::Set(opening_hours);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Park::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
