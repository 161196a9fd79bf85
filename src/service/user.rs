//! User account administration.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(User::from_entity(user))
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Updates an account, re-checking email uniqueness when it changes.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let existing = user_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(new_email) = &params.email {
            if *new_email != existing.email && user_repo.get_by_email(new_email).await?.is_some() {
                return Err(AppError::InvalidOperation(
                    "An account with this email already exists".to_string(),
                ));
            }
        }

        let user = user_repo.update(id, params).await?;

        Ok(User::from_entity(user))
    }

    /// Deletes an account and, through cascade, its reservations.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        user_repo.delete(id).await?;

        Ok(())
    }
}
