//! User request and response bodies.

use entity::user::UserRole;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::user::{UpdateUserParams, User},
};

/// Oldest plausible visitor age accepted by registration.
pub const MAX_AGE: i32 = 120;

pub(crate) fn validate_age(age: Option<i32>) -> Result<(), AppError> {
    if let Some(age) = age {
        if !(1..=MAX_AGE).contains(&age) {
            return Err(AppError::BadRequest(format!(
                "Age must be between 1 and {}",
                MAX_AGE
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_email(email: &str) -> Result<(), AppError> {
    if !email.contains('@') || email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Email address is not valid".to_string(),
        ));
    }
    Ok(())
}

/// A user account as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub age: Option<i32>,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            age: user.age,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

/// Body of `PUT /api/users/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub age: Option<i32>,
    pub active: bool,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        validate_email(&self.email)?;
        validate_age(self.age)?;
        Ok(())
    }

    pub fn into_params(self) -> UpdateUserParams {
        UpdateUserParams {
            name: Some(self.name),
            email: Some(self.email),
            phone: Some(self.phone),
            role: Some(self.role),
            age: Some(self.age),
            active: Some(self.active),
        }
    }
}
