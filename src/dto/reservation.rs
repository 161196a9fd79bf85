//! Reservation request and response bodies.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::reservation::{
        CalendarDay, CreateReservationParams, Reservation, ReservationDetails,
        UpdateReservationParams,
    },
};

/// Largest party size a single reservation may book.
pub const MAX_PARTY_SIZE: i32 = 50;

fn validate_visitors(visitors: i32) -> Result<(), AppError> {
    if !(1..=MAX_PARTY_SIZE).contains(&visitors) {
        return Err(AppError::BadRequest(format!(
            "Party size must be between 1 and {}",
            MAX_PARTY_SIZE
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub park_id: i32,
    /// `null` means the booking covers the park as a whole.
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub visitors: i32,
    pub status: ReservationStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            park_id: reservation.park_id,
            trail_id: reservation.trail_id,
            visit_date: reservation.visit_date,
            entry_time: reservation.entry_time,
            visitors: reservation.visitors,
            status: reservation.status,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            created_at: reservation.created_at,
        }
    }
}

/// A reservation with the display names of its user, park, and trail.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationDetailsDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub user_name: String,
    pub park_name: String,
    pub trail_name: Option<String>,
}

impl From<ReservationDetails> for ReservationDetailsDto {
    fn from(details: ReservationDetails) -> Self {
        Self {
            reservation: details.reservation.into(),
            user_name: details.user_name,
            park_name: details.park_name,
            trail_name: details.trail_name,
        }
    }
}

/// Body of `POST /api/reservations`.
///
/// The owning user is taken from the authenticated identity, never from
/// the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationDto {
    pub park_id: i32,
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub visitors: i32,
}

impl CreateReservationDto {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_visitors(self.visitors)
    }

    pub fn into_params(self, user_id: i32) -> CreateReservationParams {
        CreateReservationParams {
            user_id,
            park_id: self.park_id,
            trail_id: self.trail_id,
            visit_date: self.visit_date,
            entry_time: self.entry_time,
            visitors: self.visitors,
        }
    }
}

/// Body of `PUT /api/reservations/{id}`.
///
/// Status is deliberately absent: lifecycle transitions go through the
/// dedicated check-in, check-out, and cancel endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservationDto {
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub visitors: i32,
}

impl UpdateReservationDto {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_visitors(self.visitors)
    }

    pub fn into_params(self) -> UpdateReservationParams {
        UpdateReservationParams {
            trail_id: Some(self.trail_id),
            visit_date: Some(self.visit_date),
            entry_time: Some(self.entry_time),
            visitors: Some(self.visitors),
        }
    }
}

/// Query parameters of `GET /api/reservations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationListQuery {
    pub park_id: Option<i32>,
    pub trail_id: Option<i32>,
    pub user_id: Option<i32>,
    pub status: Option<ReservationStatus>,
    /// Exact visit date.
    pub visit_date: Option<NaiveDate>,
    /// Inclusive start of a visit-date range.
    pub visit_date_from: Option<NaiveDate>,
    /// Inclusive end of a visit-date range.
    pub visit_date_to: Option<NaiveDate>,
}

/// Query parameters of `GET /api/parks/{park_id}/calendar`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// One day of the park occupancy calendar.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDayDto {
    pub date: NaiveDate,
    pub reservations: i64,
    pub visitors: i64,
}

impl From<CalendarDay> for CalendarDayDto {
    fn from(day: CalendarDay) -> Self {
        Self {
            date: day.date,
            reservations: day.reservations,
            visitors: day.visitors,
        }
    }
}
