use chrono::{DateTime, NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::reservation::{
    CreateReservationParams, ReservationFilter, UpdateReservationParams,
};

pub struct ReservationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation in the active state.
    ///
    /// Capacity and lifecycle rules live in the reservation service; this
    /// method only persists. Callers that need the availability check and
    /// the insert to be atomic run both on the same transaction.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(params.user_id),
            park_id: ActiveValue::Set(params.park_id),
            trail_id: ActiveValue::Set(params.trail_id),
            visit_date: ActiveValue::Set(params.visit_date),
            entry_time: ActiveValue::Set(params.entry_time),
            visitors: ActiveValue::Set(params.visitors),
            status: ActiveValue::Set(ReservationStatus::Active),
            check_in: ActiveValue::Set(None),
            check_out: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists reservations matching a filter, newest visit dates first.
    ///
    /// # Arguments
    /// - `filter`: Dimensions to restrict; `None` fields are unfiltered
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((reservations, total))`: One page and the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn get_filtered(
        &self,
        filter: ReservationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::reservation::Model>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::reservation::Column::UserId.eq(user_id));
        }
        if let Some(park_id) = filter.park_id {
            query = query.filter(entity::reservation::Column::ParkId.eq(park_id));
        }
        if let Some(trail_id) = filter.trail_id {
            query = query.filter(entity::reservation::Column::TrailId.eq(trail_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }
        if let Some(visit_date) = filter.visit_date {
            query = query.filter(entity::reservation::Column::VisitDate.eq(visit_date));
        }
        if let Some(from) = filter.visit_date_from {
            query = query.filter(entity::reservation::Column::VisitDate.gte(from));
        }
        if let Some(to) = filter.visit_date_to {
            query = query.filter(entity::reservation::Column::VisitDate.lte(to));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::VisitDate)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reservations = paginator.fetch_page(page).await?;

        Ok((reservations, total))
    }

    /// Sums the visitors of active reservations for a park (or one of its
    /// trails) on a date.
    ///
    /// Cancelled and completed reservations never consume capacity. Run on
    /// the same transaction as a subsequent insert or update, this is the
    /// occupancy side of the atomic availability check.
    ///
    /// # Arguments
    /// - `park_id`: Park being checked
    /// - `trail_id`: Restrict to one trail; `None` counts the whole park
    /// - `visit_date`: Date being checked
    /// - `exclude_reservation`: Reservation id to leave out of the sum,
    ///   used when re-checking an update against its own booking
    ///
    /// # Returns
    /// - `Ok(i64)`: Total booked visitors (0 when there are none)
    /// - `Err(DbErr)`: Database error
    pub async fn visitors_on_date(
        &self,
        park_id: i32,
        trail_id: Option<i32>,
        visit_date: NaiveDate,
        exclude_reservation: Option<i32>,
    ) -> Result<i64, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .select_only()
            .column_as(entity::reservation::Column::Visitors.sum(), "total")
            .filter(entity::reservation::Column::ParkId.eq(park_id))
            .filter(entity::reservation::Column::VisitDate.eq(visit_date))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Active));

        if let Some(trail_id) = trail_id {
            query = query.filter(entity::reservation::Column::TrailId.eq(trail_id));
        }
        if let Some(exclude) = exclude_reservation {
            query = query.filter(entity::reservation::Column::Id.ne(exclude));
        }

        let total = query
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(total.unwrap_or(0))
    }

    /// Checks whether a user already holds an active reservation for a park
    /// on a date.
    pub async fn active_exists(
        &self,
        user_id: i32,
        park_id: i32,
        visit_date: NaiveDate,
        exclude_reservation: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::ParkId.eq(park_id))
            .filter(entity::reservation::Column::VisitDate.eq(visit_date))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Active));

        if let Some(exclude) = exclude_reservation {
            query = query.filter(entity::reservation::Column::Id.ne(exclude));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Lists non-cancelled reservations of a park inside a date range.
    ///
    /// Raw rows for the occupancy calendar; the service aggregates them
    /// per day.
    pub async fn get_in_range(
        &self,
        park_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ParkId.eq(park_id))
            .filter(entity::reservation::Column::VisitDate.gte(from))
            .filter(entity::reservation::Column::VisitDate.lte(to))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .order_by_asc(entity::reservation::Column::VisitDate)
            .all(self.db)
            .await
    }

    /// Updates the bookable fields of a reservation.
    ///
    /// Status and the check timestamps are never touched here; those go
    /// through the dedicated lifecycle methods below.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated reservation
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();

        if let Some(trail_id) = params.trail_id {
            active_model.trail_id = ActiveValue::Set(trail_id);
        }
        if let Some(visit_date) = params.visit_date {
            active_model.visit_date = ActiveValue::Set(visit_date);
        }
        if let Some(entry_time) = params.entry_time {
            active_model.entry_time = ActiveValue::Set(entry_time);
        }
        if let Some(visitors) = params.visitors {
            active_model.visitors = ActiveValue::Set(visitors);
        }

        active_model.update(self.db).await
    }

    /// Records the arrival timestamp on a reservation.
    pub async fn mark_checked_in(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.check_in = ActiveValue::Set(Some(at));

        active_model.update(self.db).await
    }

    /// Records the departure timestamp and moves the reservation to the
    /// completed state.
    pub async fn mark_checked_out(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.check_out = ActiveValue::Set(Some(at));
        active_model.status = ActiveValue::Set(ReservationStatus::Completed);

        active_model.update(self.db).await
    }

    /// Moves the reservation to the cancelled state.
    pub async fn mark_cancelled(&self, id: i32) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.status = ActiveValue::Set(ReservationStatus::Cancelled);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
