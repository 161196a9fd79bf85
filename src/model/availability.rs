//! Domain models for the availability check.

use chrono::NaiveDate;

/// Parameters for checking whether a visit can be booked.
#[derive(Debug, Clone)]
pub struct CheckAvailabilityParams {
    pub park_id: i32,
    /// `None` checks the park as a whole rather than a specific trail.
    pub trail_id: Option<i32>,
    pub visit_date: NaiveDate,
    /// Size of the party that wants to book.
    pub visitors: i32,
}

/// Result of an availability check.
///
/// The check never fails for business reasons: an unbookable date comes
/// back as `available: false` with a human-readable `reason`, so the
/// endpoint can always answer 200.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    /// Whether the requested party fits on the requested date.
    pub available: bool,
    /// Why the date cannot be booked, when `available` is false.
    pub reason: Option<String>,
    /// Places remaining on the date. `None` when the scope is unbounded.
    pub vacancies: Option<i32>,
    /// Daily limit of the requested scope. `None` when unbounded.
    pub capacity: Option<i32>,
    /// Advisory notices, such as high projected occupancy.
    pub warnings: Vec<String>,
}

impl Availability {
    /// An unavailable result with the given reason and occupancy figures.
    pub fn unavailable(
        reason: impl Into<String>,
        vacancies: Option<i32>,
        capacity: Option<i32>,
    ) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
            vacancies,
            capacity,
            warnings: Vec::new(),
        }
    }
}
