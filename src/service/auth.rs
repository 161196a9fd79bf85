//! Account registration and password login.
//!
//! The HTTP layer's identity still comes from the upstream auth proxy; this
//! service backs the credential endpoints that proxy delegates to.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    dto::auth::{ChangePasswordDto, LoginDto, RegisterDto},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new visitor account.
    ///
    /// # Returns
    /// - `Ok(User)`: The created account
    /// - `Err(AppError::InvalidOperation)`: Email already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&dto.email).await?.is_some() {
            return Err(AppError::InvalidOperation(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password, &dto.email);

        let user = user_repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
                role: UserRole::Visitor,
                age: dto.age,
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered new account");

        Ok(User::from_entity(user))
    }

    /// Verifies login credentials.
    ///
    /// Unknown email, wrong password, accounts without password login, and
    /// deactivated accounts all fail with the same error so the response
    /// does not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok(User)`: Credentials valid
    /// - `Err(AuthError::InvalidCredentials)`: Anything else
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(stored_hash) = &user.password_hash else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.active || !verify_password(&dto.password, &user.email, stored_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    /// Changes the caller's own password after verifying the current one.
    pub async fn change_password(
        &self,
        user_id: i32,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let Some(stored_hash) = &user.password_hash else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.current_password, &user.email, stored_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let new_hash = hash_password(&dto.new_password, &user.email);
        user_repo.set_password_hash(user_id, new_hash).await?;

        Ok(())
    }
}
