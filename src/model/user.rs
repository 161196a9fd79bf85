//! Domain models for user accounts.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

/// A registered user account.
///
/// The stored password hash is deliberately absent; it never leaves the
/// data layer except through the auth service's credential check.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Unique email address, also used as login identifier.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Account role controlling administrative access.
    pub role: UserRole,
    /// Optional age in years.
    pub age: Option<i32>,
    /// Whether the account is active. Deactivated accounts cannot act.
    pub active: bool,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            role: entity.role,
            age: entity.age,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub age: Option<i32>,
    /// Pre-hashed password digest. `None` creates an account without
    /// password login.
    pub password_hash: Option<String>,
}

/// Parameters for updating an existing user account.
///
/// All fields are optional - only provided fields will be updated. Nullable
/// columns use a nested Option: the outer indicates field presence, the
/// inner the new value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub age: Option<Option<i32>>,
    pub active: Option<bool>,
}
