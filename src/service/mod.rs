//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the domain rules: capacity
//! and availability, the reservation lifecycle, uniqueness constraints, and
//! ownership. Controllers call services and never touch repositories
//! directly.

pub mod auth;
pub mod availability;
pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
