//! Domain models and operation parameter types.
//!
//! Services accept and return these types, converting the SeaORM entity
//! models coming out of the data layer via `from_entity` so controllers
//! never handle raw entities.

pub mod availability;
pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
