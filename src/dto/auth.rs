//! Registration and login request bodies.

use serde::Deserialize;

use crate::{
    dto::user::{validate_age, validate_email},
    error::AppError,
};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
}

impl RegisterDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        validate_email(&self.email)?;
        if self.password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        validate_age(self.age)?;
        Ok(())
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/password`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.new_password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        Ok(())
    }
}
