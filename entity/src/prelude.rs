pub use super::park::Entity as Park;
pub use super::point_of_interest::Entity as PointOfInterest;
pub use super::reservation::Entity as Reservation;
pub use super::species::Entity as Species;
pub use super::trail::Entity as Trail;
pub use super::user::Entity as User;
pub use super::visit_report::Entity as VisitReport;
