//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are
//! generic over `ConnectionTrait`, so the same repository runs against the shared pool or
//! inside a transaction. The reservation service relies on the latter to keep the
//! availability check and the insert in one atomic unit.

pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
