//! SeaORM entity models for the trailhead database schema.
//!
//! One module per table. Status, role, difficulty, and kind columns are
//! modeled as typed active enums rather than free-form strings so that
//! invalid values are unrepresentable past the boundary.

pub mod park;
pub mod point_of_interest;
pub mod prelude;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
