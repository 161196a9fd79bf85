//! Reservation booking and lifecycle.
//!
//! A reservation starts active and either completes through check-in and
//! check-out at the park gate, or is cancelled before check-in. Booking and
//! rebooking run the availability check and the write inside one database
//! transaction, so two concurrent requests cannot both squeeze into the
//! last remaining places.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};

use crate::{
    data::{park::ParkRepository, reservation::ReservationRepository},
    error::{auth::AuthError, AppError},
    model::{
        availability::CheckAvailabilityParams,
        reservation::{
            CalendarDay, CreateReservationParams, Reservation, ReservationDetails,
            ReservationFilter, UpdateReservationParams,
        },
    },
    service::availability::AvailabilityService,
};

/// Longest calendar range a single query may request, in days.
const MAX_CALENDAR_RANGE_DAYS: i64 = 366;

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a new visit.
    ///
    /// Runs inside a transaction: the availability check, the duplicate
    /// booking check, and the insert commit together or not at all.
    ///
    /// # Returns
    /// - `Ok(ReservationDetails)`: The created reservation with names resolved
    /// - `Err(AppError::InvalidOperation)`: Date unavailable or duplicate booking
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<ReservationDetails, AppError> {
        let txn = self.db.begin().await?;

        let availability = AvailabilityService::new(&txn)
            .check(&CheckAvailabilityParams {
                park_id: params.park_id,
                trail_id: params.trail_id,
                visit_date: params.visit_date,
                visitors: params.visitors,
            })
            .await?;

        if !availability.available {
            let reason = availability
                .reason
                .unwrap_or_else(|| "The requested date is not available".to_string());
            return Err(AppError::InvalidOperation(reason));
        }

        let reservation_repo = ReservationRepository::new(&txn);

        if reservation_repo
            .active_exists(params.user_id, params.park_id, params.visit_date, None)
            .await?
        {
            return Err(AppError::InvalidOperation(
                "You already have an active reservation for this park on this date".to_string(),
            ));
        }

        let reservation = reservation_repo.create(params).await?;

        txn.commit().await?;

        for warning in &availability.warnings {
            tracing::info!(reservation_id = reservation.id, "{}", warning);
        }

        self.get_details(reservation.id).await
    }

    /// Gets a reservation without name enrichment.
    pub async fn get(&self, id: i32) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Gets a reservation enriched with user, park, and trail names.
    pub async fn get_details(&self, id: i32) -> Result<ReservationDetails, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let user = entity::prelude::User::find_by_id(reservation.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation owner not found".to_string()))?;

        let park = entity::prelude::Park::find_by_id(reservation.park_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserved park not found".to_string()))?;

        let trail_name = match reservation.trail_id {
            Some(trail_id) => entity::prelude::Trail::find_by_id(trail_id)
                .one(self.db)
                .await?
                .map(|trail| trail.name),
            None => None,
        };

        Ok(ReservationDetails {
            reservation: Reservation::from_entity(reservation),
            user_name: user.name,
            park_name: park.name,
            trail_name,
        })
    }

    /// Lists reservations matching a filter, with names resolved in bulk.
    ///
    /// # Returns
    /// - `Ok((details, total))`: One page and the total match count
    pub async fn list(
        &self,
        filter: ReservationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReservationDetails>, u64), AppError> {
        let (reservations, total) = ReservationRepository::new(self.db)
            .get_filtered(filter, page, per_page)
            .await?;

        let user_ids: Vec<i32> = reservations.iter().map(|r| r.user_id).collect();
        let park_ids: Vec<i32> = reservations.iter().map(|r| r.park_id).collect();
        let trail_ids: Vec<i32> = reservations.iter().filter_map(|r| r.trail_id).collect();

        let user_names: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect();

        let park_names: HashMap<i32, String> = entity::prelude::Park::find()
            .filter(entity::park::Column::Id.is_in(park_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|park| (park.id, park.name))
            .collect();

        let trail_names: HashMap<i32, String> = entity::prelude::Trail::find()
            .filter(entity::trail::Column::Id.is_in(trail_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|trail| (trail.id, trail.name))
            .collect();

        let details = reservations
            .into_iter()
            .map(|reservation| {
                let user_name = user_names
                    .get(&reservation.user_id)
                    .cloned()
                    .unwrap_or_default();
                let park_name = park_names
                    .get(&reservation.park_id)
                    .cloned()
                    .unwrap_or_default();
                let trail_name = reservation
                    .trail_id
                    .and_then(|id| trail_names.get(&id).cloned());

                ReservationDetails {
                    reservation: Reservation::from_entity(reservation),
                    user_name,
                    park_name,
                    trail_name,
                }
            })
            .collect();

        Ok((details, total))
    }

    /// Rebooks an active, not-yet-checked-in reservation.
    ///
    /// The availability re-check excludes the reservation's own visitors,
    /// so shrinking or moving a booking on a full date is allowed. Runs in
    /// a transaction for the same reason as `create`.
    ///
    /// # Arguments
    /// - `id`: Reservation to update
    /// - `params`: New booking values
    /// - `actor_id`: Authenticated caller
    /// - `actor_is_staff`: Whether the caller may act on others' bookings
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
        actor_id: i32,
        actor_is_staff: bool,
    ) -> Result<ReservationDetails, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if !actor_is_staff && reservation.user_id != actor_id {
            return Err(AuthError::NotOwner {
                user_id: actor_id,
                reservation_id: id,
            }
            .into());
        }

        if reservation.status != ReservationStatus::Active {
            return Err(AppError::InvalidOperation(
                "Only active reservations can be modified".to_string(),
            ));
        }

        if reservation.check_in.is_some() {
            return Err(AppError::InvalidOperation(
                "A reservation cannot be modified after check-in".to_string(),
            ));
        }

        let new_trail_id = params.trail_id.unwrap_or(reservation.trail_id);
        let new_visit_date = params.visit_date.unwrap_or(reservation.visit_date);
        let new_visitors = params.visitors.unwrap_or(reservation.visitors);

        let availability = AvailabilityService::new(&txn)
            .check_excluding(
                &CheckAvailabilityParams {
                    park_id: reservation.park_id,
                    trail_id: new_trail_id,
                    visit_date: new_visit_date,
                    visitors: new_visitors,
                },
                Some(id),
            )
            .await?;

        if !availability.available {
            let reason = availability
                .reason
                .unwrap_or_else(|| "The requested date is not available".to_string());
            return Err(AppError::InvalidOperation(reason));
        }

        if reservation_repo
            .active_exists(
                reservation.user_id,
                reservation.park_id,
                new_visit_date,
                Some(id),
            )
            .await?
        {
            return Err(AppError::InvalidOperation(
                "You already have an active reservation for this park on this date".to_string(),
            ));
        }

        reservation_repo.update(id, params).await?;

        txn.commit().await?;

        self.get_details(id).await
    }

    /// Records arrival at the park gate.
    ///
    /// Check-in is only possible once, on the visit date itself, for an
    /// active reservation.
    pub async fn check_in(&self, id: i32) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservation = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.status != ReservationStatus::Active {
            return Err(AppError::InvalidOperation(
                "Only active reservations can be checked in".to_string(),
            ));
        }

        if reservation.check_in.is_some() {
            return Err(AppError::InvalidOperation(
                "Reservation has already been checked in".to_string(),
            ));
        }

        if reservation.visit_date != Utc::now().date_naive() {
            return Err(AppError::InvalidOperation(
                "Check-in is only possible on the visit date".to_string(),
            ));
        }

        let updated = reservation_repo.mark_checked_in(id, Utc::now()).await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Records departure and completes the reservation.
    ///
    /// Requires a prior check-in; a visit that never started cannot end.
    pub async fn check_out(&self, id: i32) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservation = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.status != ReservationStatus::Active {
            return Err(AppError::InvalidOperation(
                "Only active reservations can be checked out".to_string(),
            ));
        }

        if reservation.check_in.is_none() {
            return Err(AppError::InvalidOperation(
                "Check-out requires a prior check-in".to_string(),
            ));
        }

        let updated = reservation_repo.mark_checked_out(id, Utc::now()).await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Cancels an active reservation before check-in.
    ///
    /// Visitors may only cancel their own bookings; staff may cancel any.
    pub async fn cancel(
        &self,
        id: i32,
        actor_id: i32,
        actor_is_staff: bool,
    ) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservation = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if !actor_is_staff && reservation.user_id != actor_id {
            return Err(AuthError::NotOwner {
                user_id: actor_id,
                reservation_id: id,
            }
            .into());
        }

        if reservation.status != ReservationStatus::Active {
            return Err(AppError::InvalidOperation(
                "Only active reservations can be cancelled".to_string(),
            ));
        }

        if reservation.check_in.is_some() {
            return Err(AppError::InvalidOperation(
                "A reservation cannot be cancelled after check-in".to_string(),
            ));
        }

        let updated = reservation_repo.mark_cancelled(id).await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Permanently deletes a reservation. Administrative cleanup only;
    /// regular flows cancel instead. A visit that already started at the
    /// gate stays on record.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservation = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.check_in.is_some() {
            return Err(AppError::InvalidOperation(
                "A reservation cannot be deleted after check-in".to_string(),
            ));
        }

        reservation_repo.delete(id).await?;

        Ok(())
    }

    /// Builds the daily occupancy calendar of a park.
    ///
    /// Every day in the range appears, including days with no bookings.
    /// Cancelled reservations are not counted.
    pub async fn calendar(
        &self,
        park_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CalendarDay>, AppError> {
        if from > to {
            return Err(AppError::BadRequest(
                "Range start must not be after range end".to_string(),
            ));
        }
        if (to - from).num_days() >= MAX_CALENDAR_RANGE_DAYS {
            return Err(AppError::BadRequest(
                "Date range must not exceed one year".to_string(),
            ));
        }

        ParkRepository::new(self.db)
            .get_by_id(park_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        let reservations = ReservationRepository::new(self.db)
            .get_in_range(park_id, from, to)
            .await?;

        let mut per_day: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
        for reservation in reservations {
            let entry = per_day.entry(reservation.visit_date).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += i64::from(reservation.visitors);
        }

        let mut days = Vec::new();
        let mut date = from;
        while date <= to {
            let (reservations, visitors) = per_day.get(&date).copied().unwrap_or((0, 0));
            days.push(CalendarDay {
                date,
                reservations,
                visitors,
            });
            date += Duration::days(1);
        }

        Ok(days)
    }
}
