use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::MessageDto,
        user::{UpdateUserDto, UserDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    service::user::UserService,
    state::AppState,
};

/// GET /api/users/me
/// The caller's own account.
pub async fn get_me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let user = UserService::new(&state.db).get(identity.user_id).await?;

    Ok(Json(UserDto::from(user)))
}

/// GET /api/users
/// List all accounts. Staff only.
pub async fn list_users(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let users = UserService::new(&state.db).list().await?;

    Ok(Json(
        users.into_iter().map(UserDto::from).collect::<Vec<_>>(),
    ))
}

/// GET /api/users/{id}
/// One account. Staff only.
pub async fn get_user(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok(Json(UserDto::from(user)))
}

/// PUT /api/users/{id}
/// Update an account, including role and active flag. Admin only.
pub async fn update_user(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    dto.validate()?;

    let user = UserService::new(&state.db)
        .update(id, dto.into_params())
        .await?;

    Ok(Json(UserDto::from(user)))
}

/// DELETE /api/users/{id}
/// Delete an account and its reservations. Admin only.
pub async fn delete_user(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("User deleted")))
}
