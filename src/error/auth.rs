use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The upstream auth middleware did not inject identity headers.
    ///
    /// Every protected route requires the caller's user id; a request
    /// without it was never authenticated. Results in 401 Unauthorized.
    #[error("Request is missing the authenticated identity")]
    MissingIdentity,

    /// The injected identity headers could not be parsed.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid identity header: {0}")]
    InvalidIdentity(String),

    /// The authenticated user id does not exist in the database.
    ///
    /// Indicates a stale or forged identity. Results in 401 Unauthorized.
    #[error("Authenticated user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login failed: unknown email, wrong password, or an account without
    /// password login.
    ///
    /// One variant for all three cases so the response never reveals
    /// whether the email is registered. Results in 401 Unauthorized.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user lacks the role required for the operation, or the account
    /// is deactivated.
    ///
    /// Results in 403 Forbidden. The detail string is logged, not returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The user attempted to act on a reservation owned by someone else.
    ///
    /// Kept distinct from business-rule violations so callers can tell an
    /// ownership failure apart from a lifecycle failure. Results in
    /// 403 Forbidden.
    #[error("User {user_id} does not own reservation {reservation_id}")]
    NotOwner { user_id: i32, reservation_id: i32 },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and client-safe
/// error messages:
/// - `MissingIdentity` / `InvalidIdentity` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` / `NotOwner` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping
/// client-facing messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::InvalidIdentity(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to modify this reservation".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
