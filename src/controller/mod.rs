//! HTTP request handlers.
//!
//! Controllers stay thin: extract the caller identity, enforce access with
//! the `AuthGuard`, validate the request body, call the service, and map
//! the result to a response DTO.

pub mod auth;
pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;

use entity::user::UserRole;

/// Whether a user may act on records owned by other users.
pub(crate) fn is_staff(user: &entity::user::Model) -> bool {
    matches!(user.role, UserRole::Admin | UserRole::Staff)
}
