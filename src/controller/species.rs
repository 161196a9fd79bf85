use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::MessageDto,
        species::{CreateSpeciesDto, SpeciesDto, SpeciesQuery, UpdateSpeciesDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    service::species::SpeciesService,
    state::AppState,
};

/// GET /api/species?kind=..&category=..&q=..
/// Search the flora and fauna catalog.
pub async fn list_species(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<SpeciesQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let species = SpeciesService::new(&state.db)
        .search(query.into_filter())
        .await?;

    Ok(Json(
        species.into_iter().map(SpeciesDto::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/species/{id}
/// One catalog entry.
pub async fn get_species(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let species = SpeciesService::new(&state.db).get(id).await?;

    Ok(Json(SpeciesDto::from(species)))
}

/// GET /api/trails/{trail_id}/species
/// Field guide: the species observable on one trail.
pub async fn get_field_guide(
    State(state): State<AppState>,
    identity: Identity,
    Path(trail_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let species = SpeciesService::new(&state.db).field_guide(trail_id).await?;

    Ok(Json(
        species.into_iter().map(SpeciesDto::from).collect::<Vec<_>>(),
    ))
}

/// POST /api/species
/// Add a catalog entry. Staff only.
pub async fn create_species(
    State(state): State<AppState>,
    identity: Identity,
    Json(dto): Json<CreateSpeciesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let species = SpeciesService::new(&state.db)
        .create(dto.into_params())
        .await?;

    Ok((StatusCode::CREATED, Json(SpeciesDto::from(species))))
}

/// PUT /api/species/{id}
/// Update a catalog entry. Staff only.
pub async fn update_species(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateSpeciesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    dto.validate()?;

    let species = SpeciesService::new(&state.db)
        .update(id, dto.into_params())
        .await?;

    Ok(Json(SpeciesDto::from(species)))
}

/// DELETE /api/species/{id}
/// Remove a catalog entry. Staff only.
pub async fn delete_species(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    SpeciesService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Species deleted")))
}
