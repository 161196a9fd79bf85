//! Domain models for visit reservations.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::reservation::ReservationStatus;

/// A booked visit to a park or a specific trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: i32,
    /// ID of the owning user.
    pub user_id: i32,
    /// ID of the park being visited.
    pub park_id: i32,
    /// ID of the booked trail. `None` books the park as a whole.
    pub trail_id: Option<i32>,
    /// Date of the visit.
    pub visit_date: NaiveDate,
    /// Planned entry time, if the visitor declared one.
    pub entry_time: Option<NaiveTime>,
    /// Size of the visiting party.
    pub visitors: i32,
    /// Lifecycle state.
    pub status: ReservationStatus,
    /// Timestamp of arrival at the park, set by staff at the gate.
    pub check_in: Option<DateTime<Utc>>,
    /// Timestamp of departure, set by staff at the gate.
    pub check_out: Option<DateTime<Utc>>,
    /// Timestamp when the reservation was created.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            park_id: entity.park_id,
            trail_id: entity.trail_id,
            visit_date: entity.visit_date,
            entry_time: entity.entry_time,
            visitors: entity.visitors,
            status: entity.status,
            check_in: entity.check_in,
            check_out: entity.check_out,
            created_at: entity.created_at,
        }
    }
}

/// A reservation enriched with the display names of its related records.
///
/// Produced by the detail and listing queries so clients don't have to
/// resolve user, park, and trail names themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    /// Display name of the owning user.
    pub user_name: String,
    /// Name of the booked park.
    pub park_name: String,
    /// Name of the booked trail, when the booking targets one.
    pub trail_name: Option<String>,
}

/// Parameters for creating a new reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    /// ID of the owning user, taken from the authenticated identity.
    pub user_id: i32,
    pub park_id: i32,
    /// `None` books the park as a whole.
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub visitors: i32,
}

/// Parameters for updating a reservation that has not been checked in.
///
/// All fields are optional - only provided fields will be updated. Status
/// is deliberately absent: lifecycle transitions go through the dedicated
/// check-in, check-out, and cancel operations.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub trail_id: Option<Option<i32>>,
    pub visit_date: Option<NaiveDate>,
    pub entry_time: Option<Option<NaiveTime>>,
    pub visitors: Option<i32>,
}

/// Filter for reservation listing queries.
///
/// Fields are combined with AND; `None` leaves that dimension unfiltered.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub user_id: Option<i32>,
    pub park_id: Option<i32>,
    pub trail_id: Option<i32>,
    pub status: Option<ReservationStatus>,
    /// Exact visit date.
    pub visit_date: Option<NaiveDate>,
    /// Inclusive start of a visit-date range.
    pub visit_date_from: Option<NaiveDate>,
    /// Inclusive end of a visit-date range.
    pub visit_date_to: Option<NaiveDate>,
}

/// Booking load of a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Number of non-cancelled reservations on this date.
    pub reservations: i64,
    /// Total visitors across those reservations.
    pub visitors: i64,
}
