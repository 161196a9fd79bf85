use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::MessageDto,
        auth::{ChangePasswordDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    error::AppError,
    middleware::auth::Identity,
    service::auth::AuthService,
    state::AppState,
};

/// POST /api/auth/register
/// Create a visitor account with password login. Public.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    dto.validate()?;

    let user = AuthService::new(&state.db).register(dto).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// POST /api/auth/login
/// Verify credentials and return the account. Public; the upstream proxy
/// turns this into a session or token.
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(dto).await?;

    Ok(Json(UserDto::from(user)))
}

/// POST /api/auth/password
/// Change the caller's own password.
pub async fn change_password(
    State(state): State<AppState>,
    identity: Identity,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    dto.validate()?;

    AuthService::new(&state.db)
        .change_password(identity.user_id, dto)
        .await?;

    Ok(Json(MessageDto::new("Password changed")))
}
