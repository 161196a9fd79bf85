use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::trail::TrailDifficulty;
use serde::Deserialize;

use crate::{
    dto::{
        api::MessageDto,
        trail::{CreateTrailDto, TrailAvailabilityDto, TrailDto, UpdateTrailDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::trail::TrailFilter,
    service::trail::TrailService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct TrailListQuery {
    /// When true, closed trails are omitted.
    #[serde(default)]
    pub active_only: bool,
    /// Substring to match against trail names.
    pub name: Option<String>,
    pub difficulty: Option<TrailDifficulty>,
}

#[derive(Deserialize)]
pub struct TrailAvailabilityQuery {
    pub date: NaiveDate,
}

/// GET /api/parks/{park_id}/trails
/// List the trails of a park.
pub async fn list_trails(
    State(state): State<AppState>,
    identity: Identity,
    Path(park_id): Path<i32>,
    Query(query): Query<TrailListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let trails = TrailService::new(&state.db)
        .list_by_park(
            park_id,
            TrailFilter {
                name: query.name,
                difficulty: query.difficulty,
                active_only: query.active_only,
            },
        )
        .await?;

    Ok(Json(
        trails.into_iter().map(TrailDto::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/parks/{park_id}/trails/available?date=YYYY-MM-DD
/// Active trails of a park with their booking load on a date.
pub async fn list_available_trails(
    State(state): State<AppState>,
    identity: Identity,
    Path(park_id): Path<i32>,
    Query(query): Query<TrailAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let trails = TrailService::new(&state.db)
        .available_on(park_id, query.date)
        .await?;

    Ok(Json(
        trails
            .into_iter()
            .map(TrailAvailabilityDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/trails/{id}
/// One trail.
pub async fn get_trail(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let trail = TrailService::new(&state.db).get(id).await?;

    Ok(Json(TrailDto::from(trail)))
}

/// POST /api/parks/{park_id}/trails
/// Create a trail. Staff only.
pub async fn create_trail(
    State(state): State<AppState>,
    identity: Identity,
    Path(park_id): Path<i32>,
    Json(dto): Json<CreateTrailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let trail = TrailService::new(&state.db)
        .create(dto.into_params(park_id))
        .await?;

    Ok((StatusCode::CREATED, Json(TrailDto::from(trail))))
}

/// PUT /api/trails/{id}
/// Update a trail. Staff only.
pub async fn update_trail(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateTrailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let trail = TrailService::new(&state.db)
        .update(id, dto.into_params())
        .await?;

    Ok(Json(TrailDto::from(trail)))
}

/// DELETE /api/trails/{id}
/// Delete a trail. Admin only.
pub async fn delete_trail(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    TrailService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Trail deleted")))
}
