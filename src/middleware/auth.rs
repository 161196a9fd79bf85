//! Identity extraction and role-based access control.
//!
//! Authentication itself happens upstream: a reverse proxy validates the
//! caller's credentials and injects the resulting identity as request
//! headers. This module extracts that identity and verifies permissions
//! against the database, which remains the source of truth for roles.

use axum::{extract::FromRequestParts, http::request::Parts};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Header carrying the authenticated user's id, set by the auth proxy.
pub const HEADER_USER_ID: &str = "x-user-id";

/// Header carrying the proxy's claim about the user's role. Advisory only;
/// the guard always re-reads the role from the database.
pub const HEADER_USER_ROLE: &str = "x-user-role";

/// The caller identity injected by the upstream auth layer.
///
/// Extracted from every protected request. A request without a valid
/// `x-user-id` header is rejected before any handler logic runs, so
/// handlers never fall back to a default user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// Database id of the authenticated user.
    pub user_id: i32,
    /// Role claimed by the proxy, if the header was present.
    pub role_claim: Option<UserRole>,
}

fn parse_role(value: &str) -> Result<UserRole, AuthError> {
    match value {
        "visitor" => Ok(UserRole::Visitor),
        "admin" => Ok(UserRole::Admin),
        "staff" => Ok(UserRole::Staff),
        "guide" => Ok(UserRole::Guide),
        other => Err(AuthError::InvalidIdentity(format!(
            "unknown role '{}'",
            other
        ))),
    }
}

impl Identity {
    /// Parses an identity from request headers.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Both headers parsed (role header optional)
    /// - `Err(AuthError::MissingIdentity)` - No `x-user-id` header
    /// - `Err(AuthError::InvalidIdentity)` - Header present but unparseable
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Result<Self, AuthError> {
        let Some(raw_id) = headers.get(HEADER_USER_ID) else {
            return Err(AuthError::MissingIdentity);
        };

        let user_id = raw_id
            .to_str()
            .map_err(|_| AuthError::InvalidIdentity("user id is not valid UTF-8".to_string()))?
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidIdentity("user id is not an integer".to_string()))?;

        let role_claim = match headers.get(HEADER_USER_ROLE) {
            Some(raw_role) => {
                let value = raw_role.to_str().map_err(|_| {
                    AuthError::InvalidIdentity("role is not valid UTF-8".to_string())
                })?;
                Some(parse_role(value)?)
            }
            None => None,
        };

        Ok(Self {
            user_id,
            role_claim,
        })
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

/// Permission levels checked by the `AuthGuard`.
pub enum Permission {
    /// Requires the admin role.
    Admin,
    /// Requires the staff role. Admins satisfy this as well.
    Staff,
}

/// Guard verifying an extracted identity against the database.
///
/// Confirms the user exists and is active, then checks each required
/// permission against the role stored in the database. The role claim in
/// the identity header is never trusted for authorization decisions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a Identity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a Identity) -> Self {
        Self { db, identity }
    }

    /// Verifies the caller exists, is active, and holds every required permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions that must all be satisfied
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user record
    /// - `Err(AppError::AuthErr)` - Unknown user, deactivated account, or missing role
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(self.identity.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(self.identity.user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccessDenied(
                user.id,
                "User account is deactivated".to_string(),
            )
            .into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Operation requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Staff) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Operation requires the staff role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
