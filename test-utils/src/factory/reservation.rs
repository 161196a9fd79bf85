//! Reservation factory for creating test reservation entities.
//!
//! This module provides factory methods for creating reservation entities
//! with sensible defaults, reducing boilerplate in tests. The factory
//! supports customization through a builder pattern.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Provides a builder pattern for creating reservation entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, user.id, park.id)
///     .trail_id(Some(trail.id))
///     .visitors(4)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    park_id: i32,
    trail_id: Option<i32>,
    visit_date: NaiveDate,
    visitors: i32,
    status: ReservationStatus,
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - trail_id: `None` (whole-park booking)
    /// - visit_date: 7 days from today
    /// - visitors: `1`
    /// - status: `ReservationStatus::Active`
    /// - check_in / check_out: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user who owns the reservation
    /// - `park_id` - ID of the park being visited
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, park_id: i32) -> Self {
        Self {
            db,
            user_id,
            park_id,
            trail_id: None,
            visit_date: Utc::now().date_naive() + Duration::days(7),
            visitors: 1,
            status: ReservationStatus::Active,
            check_in: None,
            check_out: None,
        }
    }

    /// Sets the trail being booked (`None` books the whole park).
    pub fn trail_id(mut self, trail_id: Option<i32>) -> Self {
        self.trail_id = trail_id;
        self
    }

    /// Sets the visit date.
    pub fn visit_date(mut self, visit_date: NaiveDate) -> Self {
        self.visit_date = visit_date;
        self
    }

    /// Sets the visitor count.
    pub fn visitors(mut self, visitors: i32) -> Self {
        self.visitors = visitors;
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the check-in timestamp.
    pub fn check_in(mut self, check_in: Option<DateTime<Utc>>) -> Self {
        self.check_in = check_in;
        self
    }

    /// Sets the check-out timestamp.
    pub fn check_out(mut self, check_out: Option<DateTime<Utc>>) -> Self {
        self.check_out = check_out;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            park_id: ActiveValue::Set(self.park_id),
            trail_id: ActiveValue::Set(self.trail_id),
            visit_date: ActiveValue::Set(self.visit_date),
            entry_time: ActiveValue::Set(None),
            visitors: ActiveValue::Set(self.visitors),
            status: ActiveValue::Set(self.status),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given user and park.
///
/// Shorthand for `ReservationFactory::new(db, user_id, park_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    park_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, park_id).build().await
}
