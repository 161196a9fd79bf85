use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user account
    ///
    /// # Arguments
    /// - `params`: User creation data with a pre-hashed password
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error (including unique email violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            role: ActiveValue::Set(params.role),
            age: ActiveValue::Set(params.age),
            password_hash: ActiveValue::Set(params.password_hash),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates a user account
    ///
    /// Only fields present in `params` are touched; nullable columns use a
    /// nested Option where the inner value is written as-is.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        active_model.update(self.db).await
    }

    /// Replaces the stored password digest for a user.
    pub async fn set_password_hash(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password_hash = ActiveValue::Set(Some(password_hash));

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
