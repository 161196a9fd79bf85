//! Entity factories for constructing test data.
//!
//! Each factory creates one entity with sensible defaults that individual
//! tests can override through a builder pattern. `helpers` bundles the
//! common dependency chains (user + park + trail + reservation).

pub mod helpers;
pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
