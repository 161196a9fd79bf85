//! Domain models for park trails.

use entity::trail::TrailDifficulty;

/// A marked trail inside a park.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    /// Unique identifier for the trail.
    pub id: i32,
    /// ID of the park this trail belongs to.
    pub park_id: i32,
    /// Trail name, unique within its park.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Physical difficulty grade.
    pub difficulty: Option<TrailDifficulty>,
    /// Total length in kilometres.
    pub distance_km: Option<f64>,
    /// Estimated walking time in minutes.
    pub estimated_minutes: Option<i32>,
    /// Daily visitor limit for this trail. `None` means unbounded.
    pub max_capacity: Option<i32>,
    /// Whether the trail currently accepts visits.
    pub active: bool,
}

impl Trail {
    /// Converts an entity model to a trail domain model at the repository boundary.
    pub fn from_entity(entity: entity::trail::Model) -> Self {
        Self {
            id: entity.id,
            park_id: entity.park_id,
            name: entity.name,
            description: entity.description,
            difficulty: entity.difficulty,
            distance_km: entity.distance_km,
            estimated_minutes: entity.estimated_minutes,
            max_capacity: entity.max_capacity,
            active: entity.active,
        }
    }
}

/// A trail together with its booking load on a specific date.
///
/// Produced by the daily availability listing. `vacancies` is `None` for
/// unbounded trails.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailAvailability {
    pub trail: Trail,
    /// Visitors already booked for the date across active reservations.
    pub occupied: i64,
    /// Places remaining for the date. `None` means unbounded.
    pub vacancies: Option<i32>,
}

/// Filter for per-park trail listing queries.
///
/// Fields are combined with AND; `None` leaves that dimension unfiltered.
#[derive(Debug, Clone, Default)]
pub struct TrailFilter {
    /// Substring to match against trail names.
    pub name: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    /// When true, closed trails are omitted.
    pub active_only: bool,
}

/// Parameters for creating a new trail.
#[derive(Debug, Clone)]
pub struct CreateTrailParams {
    pub park_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub max_capacity: Option<i32>,
}

/// Parameters for updating an existing trail.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrailParams {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub difficulty: Option<Option<TrailDifficulty>>,
    pub distance_km: Option<Option<f64>>,
    pub estimated_minutes: Option<Option<i32>>,
    pub max_capacity: Option<Option<i32>>,
    pub active: Option<bool>,
}
