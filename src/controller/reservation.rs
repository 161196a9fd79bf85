use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::is_staff,
    dto::{
        api::{MessageDto, PaginatedDto, PaginationQuery},
        availability::{AvailabilityDto, AvailabilityQuery},
        reservation::{
            CreateReservationDto, ReservationDetailsDto, ReservationDto, ReservationListQuery,
            UpdateReservationDto,
        },
    },
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Identity, Permission},
    model::reservation::ReservationFilter,
    service::{availability::AvailabilityService, reservation::ReservationService},
    state::AppState,
};

/// GET /api/availability?park_id=..&trail_id=..&date=..&visitors=..
/// Check whether a party fits on a date. Always answers 200; an
/// unbookable date comes back as `available: false` with a reason.
pub async fn check_availability(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    query.validate()?;

    let availability = AvailabilityService::new(&state.db)
        .check(&query.into_params())
        .await?;

    Ok(Json(AvailabilityDto::from(availability)))
}

/// POST /api/reservations
/// Book a visit. The owner is always the authenticated caller.
pub async fn create_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    dto.validate()?;

    let details = ReservationService::new(&state.db)
        .create(dto.into_params(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDetailsDto::from(details))))
}

/// GET /api/reservations
/// List reservations across users with filters. Staff only.
pub async fn list_reservations(
    State(state): State<AppState>,
    identity: Identity,
    Query(filter): Query<ReservationListQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let (details, total) = ReservationService::new(&state.db)
        .list(
            ReservationFilter {
                user_id: filter.user_id,
                park_id: filter.park_id,
                trail_id: filter.trail_id,
                status: filter.status,
                visit_date: filter.visit_date,
                visit_date_from: filter.visit_date_from,
                visit_date_to: filter.visit_date_to,
            },
            pagination.page,
            pagination.per_page,
        )
        .await?;

    Ok(Json(PaginatedDto {
        items: details
            .into_iter()
            .map(ReservationDetailsDto::from)
            .collect::<Vec<_>>(),
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// GET /api/reservations/me
/// The caller's own reservations.
pub async fn list_my_reservations(
    State(state): State<AppState>,
    identity: Identity,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let (details, total) = ReservationService::new(&state.db)
        .list(
            ReservationFilter {
                user_id: Some(user.id),
                ..Default::default()
            },
            pagination.page,
            pagination.per_page,
        )
        .await?;

    Ok(Json(PaginatedDto {
        items: details
            .into_iter()
            .map(ReservationDetailsDto::from)
            .collect::<Vec<_>>(),
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// GET /api/reservations/{id}
/// One reservation with names resolved. Owner or staff.
pub async fn get_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let details = ReservationService::new(&state.db).get_details(id).await?;

    if !is_staff(&user) && details.reservation.user_id != user.id {
        return Err(AuthError::NotOwner {
            user_id: user.id,
            reservation_id: id,
        }
        .into());
    }

    Ok(Json(ReservationDetailsDto::from(details)))
}

/// PUT /api/reservations/{id}
/// Rebook an active, not-yet-checked-in reservation. Owner or staff.
pub async fn update_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    dto.validate()?;

    let details = ReservationService::new(&state.db)
        .update(id, dto.into_params(), user.id, is_staff(&user))
        .await?;

    Ok(Json(ReservationDetailsDto::from(details)))
}

/// POST /api/reservations/{id}/check-in
/// Record arrival at the gate. Staff only.
pub async fn check_in(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let reservation = ReservationService::new(&state.db).check_in(id).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/check-out
/// Record departure and complete the visit. Staff only.
pub async fn check_out(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let reservation = ReservationService::new(&state.db).check_out(id).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/cancel
/// Cancel before check-in. Owner or staff.
pub async fn cancel_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .cancel(id, user.id, is_staff(&user))
        .await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// DELETE /api/reservations/{id}
/// Permanently delete a reservation record. Admin only.
pub async fn delete_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    ReservationService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Reservation deleted")))
}
