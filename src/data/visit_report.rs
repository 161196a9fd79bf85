use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::visit_report::{CreateVisitReportParams, UpdateVisitReportParams};

pub struct VisitReportRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VisitReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Files a new visit report
    ///
    /// # Returns
    /// - `Ok(Model)`: The created report
    /// - `Err(DbErr)`: Database error (including one-report-per-reservation violations)
    pub async fn create(
        &self,
        params: CreateVisitReportParams,
    ) -> Result<entity::visit_report::Model, DbErr> {
        entity::visit_report::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_id: ActiveValue::Set(params.reservation_id),
            rating: ActiveValue::Set(params.rating),
            comments: ActiveValue::Set(params.comments),
            problems: ActiveValue::Set(params.problems),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::visit_report::Model>, DbErr> {
        entity::prelude::VisitReport::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::visit_report::Model>, DbErr> {
        entity::prelude::VisitReport::find()
            .filter(entity::visit_report::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Lists the reports filed for visits to one park, newest first.
    ///
    /// Joins through the reservation table; the park id lives there, not
    /// on the report.
    pub async fn get_by_park(
        &self,
        park_id: i32,
    ) -> Result<Vec<entity::visit_report::Model>, DbErr> {
        entity::prelude::VisitReport::find()
            .join(
                JoinType::InnerJoin,
                entity::visit_report::Relation::Reservation.def(),
            )
            .filter(entity::reservation::Column::ParkId.eq(park_id))
            .order_by_desc(entity::visit_report::Column::CreatedAt)
            .order_by_desc(entity::visit_report::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists the reports filed by one user, newest first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::visit_report::Model>, DbErr> {
        entity::prelude::VisitReport::find()
            .join(
                JoinType::InnerJoin,
                entity::visit_report::Relation::Reservation.def(),
            )
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::visit_report::Column::CreatedAt)
            .order_by_desc(entity::visit_report::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates a visit report
    ///
    /// The 24-hour edit window is enforced by the service, not here.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated report
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateVisitReportParams,
    ) -> Result<entity::visit_report::Model, DbErr> {
        let report = entity::prelude::VisitReport::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Report {} not found", id)))?;

        let mut active_model: entity::visit_report::ActiveModel = report.into();

        if let Some(rating) = params.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(comments) = params.comments {
            active_model.comments = ActiveValue::Set(comments);
        }
        if let Some(problems) = params.problems {
            active_model.problems = ActiveValue::Set(problems);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::VisitReport::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
