use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::point_of_interest::{CreatePointOfInterestParams, UpdatePointOfInterestParams};

pub struct PointOfInterestRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PointOfInterestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new point of interest
    ///
    /// # Returns
    /// - `Ok(Model)`: The created point
    /// - `Err(DbErr)`: Database error (including per-trail unique name violations)
    pub async fn create(
        &self,
        params: CreatePointOfInterestParams,
    ) -> Result<entity::point_of_interest::Model, DbErr> {
        entity::point_of_interest::ActiveModel {
            id: ActiveValue::NotSet,
            trail_id: ActiveValue::Set(params.trail_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            kind: ActiveValue::Set(params.kind),
            trail_order: ActiveValue::Set(params.trail_order),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::point_of_interest::Model>, DbErr> {
        entity::prelude::PointOfInterest::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_trail_and_name(
        &self,
        trail_id: i32,
        name: &str,
    ) -> Result<Option<entity::point_of_interest::Model>, DbErr> {
        entity::prelude::PointOfInterest::find()
            .filter(entity::point_of_interest::Column::TrailId.eq(trail_id))
            .filter(entity::point_of_interest::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists the points of a trail in walking order.
    ///
    /// Points without an order sort last, then by id for stability.
    pub async fn get_by_trail(
        &self,
        trail_id: i32,
    ) -> Result<Vec<entity::point_of_interest::Model>, DbErr> {
        let mut points = entity::prelude::PointOfInterest::find()
            .filter(entity::point_of_interest::Column::TrailId.eq(trail_id))
            .all(self.db)
            .await?;

        points.sort_by_key(|point| (point.trail_order.is_none(), point.trail_order, point.id));

        Ok(points)
    }

    /// Returns the highest assigned order on a trail, if any point has one.
    pub async fn max_order(&self, trail_id: i32) -> Result<Option<i32>, DbErr> {
        let max = entity::prelude::PointOfInterest::find()
            .select_only()
            .column_as(entity::point_of_interest::Column::TrailOrder.max(), "max")
            .filter(entity::point_of_interest::Column::TrailId.eq(trail_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(max)
    }

    /// Updates a point of interest
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated point
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePointOfInterestParams,
    ) -> Result<entity::point_of_interest::Model, DbErr> {
        let point = entity::prelude::PointOfInterest::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Point {} not found", id)))?;

        let mut active_model: entity::point_of_interest::ActiveModel = point.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(kind) = params.kind {
            active_model.kind = ActiveValue::Set(kind);
        }
        if let Some(trail_order) = params.trail_order {
            active_model.trail_order = ActiveValue::Set(trail_order);
        }

        active_model.update(self.db).await
    }

    /// Writes a new walking order to one point.
    pub async fn set_order(
        &self,
        id: i32,
        trail_order: i32,
    ) -> Result<entity::point_of_interest::Model, DbErr> {
        let point = entity::prelude::PointOfInterest::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Point {} not found", id)))?;

        let mut active_model: entity::point_of_interest::ActiveModel = point.into();
        active_model.trail_order = ActiveValue::Set(Some(trail_order));

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PointOfInterest::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
