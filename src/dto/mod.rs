//! Request and response bodies exchanged with API clients.
//!
//! DTOs are plain serde types. Request DTOs carry a `validate()` method
//! enforcing the documented field bounds before any business logic runs;
//! violations surface as 400 Bad Request. Response DTOs are built from
//! domain models in the controllers.

pub mod api;
pub mod auth;
pub mod availability;
pub mod park;
pub mod point_of_interest;
pub mod reservation;
pub mod species;
pub mod trail;
pub mod user;
pub mod visit_report;
