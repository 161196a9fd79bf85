use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::MessageDto,
        point_of_interest::{
            CreatePointOfInterestDto, PointOfInterestDto, ReorderPointsDto,
            UpdatePointOfInterestDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    service::point_of_interest::PointOfInterestService,
    state::AppState,
};

/// GET /api/trails/{trail_id}/pois
/// Points of a trail in walking order.
pub async fn list_points(
    State(state): State<AppState>,
    identity: Identity,
    Path(trail_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let points = PointOfInterestService::new(&state.db)
        .list_by_trail(trail_id)
        .await?;

    Ok(Json(
        points
            .into_iter()
            .map(PointOfInterestDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /api/trails/{trail_id}/pois
/// Add a point to a trail. Staff only.
pub async fn create_point(
    State(state): State<AppState>,
    identity: Identity,
    Path(trail_id): Path<i32>,
    Json(dto): Json<CreatePointOfInterestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let point = PointOfInterestService::new(&state.db)
        .create(dto.into_params(trail_id))
        .await?;

    Ok((StatusCode::CREATED, Json(PointOfInterestDto::from(point))))
}

/// PUT /api/trails/{trail_id}/pois/order
/// Rewrite the walking order of a trail's points. Staff only.
pub async fn reorder_points(
    State(state): State<AppState>,
    identity: Identity,
    Path(trail_id): Path<i32>,
    Json(dto): Json<ReorderPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let points = PointOfInterestService::new(&state.db)
        .reorder(trail_id, dto.ordered_ids)
        .await?;

    Ok(Json(
        points
            .into_iter()
            .map(PointOfInterestDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/pois/{id}
/// Single point of interest.
pub async fn get_point(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let point = PointOfInterestService::new(&state.db).get(id).await?;

    Ok(Json(PointOfInterestDto::from(point)))
}

/// PUT /api/pois/{id}
/// Update a point. Staff only.
pub async fn update_point(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdatePointOfInterestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let point = PointOfInterestService::new(&state.db)
        .update(id, dto.into_params())
        .await?;

    Ok(Json(PointOfInterestDto::from(point)))
}

/// DELETE /api/pois/{id}
/// Remove a point. Staff only.
pub async fn delete_point(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    PointOfInterestService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Point of interest deleted")))
}
