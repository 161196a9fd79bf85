use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{auth, park, point_of_interest, reservation, species, trail, user, visit_report},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/password", post(auth::change_password))
        .route("/api/users", get(user::list_users))
        .route("/api/users/me", get(user::get_me))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        // Parks
        .route("/api/parks", get(park::list_parks).post(park::create_park))
        .route(
            "/api/parks/{id}",
            get(park::get_park)
                .put(park::update_park)
                .delete(park::delete_park),
        )
        .route("/api/parks/{id}/calendar", get(park::get_calendar))
        // Trails
        .route(
            "/api/parks/{park_id}/trails",
            get(trail::list_trails).post(trail::create_trail),
        )
        .route(
            "/api/parks/{park_id}/trails/available",
            get(trail::list_available_trails),
        )
        .route(
            "/api/trails/{id}",
            get(trail::get_trail)
                .put(trail::update_trail)
                .delete(trail::delete_trail),
        )
        // Points of interest
        .route(
            "/api/trails/{trail_id}/pois",
            get(point_of_interest::list_points).post(point_of_interest::create_point),
        )
        .route(
            "/api/trails/{trail_id}/pois/order",
            put(point_of_interest::reorder_points),
        )
        .route(
            "/api/pois/{id}",
            get(point_of_interest::get_point)
                .put(point_of_interest::update_point)
                .delete(point_of_interest::delete_point),
        )
        // Species catalog
        .route(
            "/api/species",
            get(species::list_species).post(species::create_species),
        )
        .route(
            "/api/species/{id}",
            get(species::get_species)
                .put(species::update_species)
                .delete(species::delete_species),
        )
        .route(
            "/api/trails/{trail_id}/species",
            get(species::get_field_guide),
        )
        // Reservations
        .route("/api/availability", get(reservation::check_availability))
        .route(
            "/api/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/me",
            get(reservation::list_my_reservations),
        )
        .route(
            "/api/reservations/{id}",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/api/reservations/{id}/check-in",
            post(reservation::check_in),
        )
        .route(
            "/api/reservations/{id}/check-out",
            post(reservation::check_out),
        )
        .route(
            "/api/reservations/{id}/cancel",
            post(reservation::cancel_reservation),
        )
        // Visit reports
        .route(
            "/api/reservations/{id}/report",
            get(visit_report::get_report).post(visit_report::create_report),
        )
        .route("/api/reports", get(visit_report::list_reports))
        .route("/api/reports/me", get(visit_report::list_my_reports))
        .route(
            "/api/reports/{id}",
            get(visit_report::get_report_by_id)
                .put(visit_report::update_report)
                .delete(visit_report::delete_report),
        )
}
