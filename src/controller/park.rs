use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::MessageDto,
        park::{CreateParkDto, ParkDto, UpdateParkDto},
        reservation::{CalendarDayDto, CalendarQuery},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    service::{park::ParkService, reservation::ReservationService},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ParkListQuery {
    /// When true, deactivated parks are omitted.
    #[serde(default)]
    pub active_only: bool,
    /// Substring to match against park names.
    pub name: Option<String>,
}

/// GET /api/parks
/// List parks.
pub async fn list_parks(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ParkListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let parks = ParkService::new(&state.db)
        .list(query.active_only, query.name)
        .await?;

    Ok(Json(
        parks.into_iter().map(ParkDto::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/parks/{id}
/// One park.
pub async fn get_park(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let park = ParkService::new(&state.db).get(id).await?;

    Ok(Json(ParkDto::from(park)))
}

/// POST /api/parks
/// Create a park. Staff only.
pub async fn create_park(
    State(state): State<AppState>,
    identity: Identity,
    Json(dto): Json<CreateParkDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let park = ParkService::new(&state.db).create(dto.into_params()).await?;

    Ok((StatusCode::CREATED, Json(ParkDto::from(park))))
}

/// PUT /api/parks/{id}
/// Update a park. Staff only.
pub async fn update_park(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateParkDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let park = ParkService::new(&state.db)
        .update(id, dto.into_params())
        .await?;

    Ok(Json(ParkDto::from(park)))
}

/// DELETE /api/parks/{id}
/// Delete a park and everything in it. Admin only.
pub async fn delete_park(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    ParkService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Park deleted")))
}

/// GET /api/parks/{id}/calendar?from=YYYY-MM-DD&to=YYYY-MM-DD
/// Daily occupancy of a park over a date range. Staff only.
pub async fn get_calendar(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let days = ReservationService::new(&state.db)
        .calendar(id, query.from, query.to)
        .await?;

    Ok(Json(
        days.into_iter().map(CalendarDayDto::from).collect::<Vec<_>>(),
    ))
}
