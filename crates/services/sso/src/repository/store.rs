//! Storage port traits and the SeaORM-backed implementation.
//!
//! The auth service depends on narrow capability traits rather than one wide
//! repository, so it can be tested against minimal fakes implementing only
//! the methods it needs. One concrete store implements all of them.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};

use super::entities::app::Entity as AppEntity;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{App, User};

#[cfg(test)]
use mockall::automock;

/// Write-side capability: persist a new user.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Save a new user, returning the assigned id.
    ///
    /// Email uniqueness is enforced atomically at the database; concurrent
    /// duplicate registrations resolve to exactly one success and the rest
    /// `AlreadyExists`.
    async fn save_user(&self, email: String, password_hash: String) -> AppResult<i64>;
}

/// Read-side capability: look up users and their admin flag.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Find a user by email, `NotFound` when absent.
    async fn find_by_email(&self, email: &str) -> AppResult<User>;

    /// Return the admin flag for a user id, `NotFound` when absent.
    async fn is_admin(&self, user_id: i64) -> AppResult<bool>;
}

/// Read-side capability: look up registered applications.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Find an application by id, `NotFound` when absent.
    async fn find_app(&self, app_id: i32) -> AppResult<App>;
}

/// Concrete store implementing every storage capability
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserSaver for SqlStore {
    async fn save_user(&self, email: String, password_hash: String) -> AppResult<i64> {
        let active_model = ActiveModel {
            email: Set(email),
            password_hash: Set(password_hash),
            is_admin: Set(false),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::already_exists("user"),
                _ => AppError::from(err),
            }
        })?;

        Ok(model.id)
    }
}

#[async_trait]
impl UserProvider for SqlStore {
    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        model.map(User::from).ok_or_not_found("user")
    }

    async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        let model = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let user = model.ok_or_not_found("user")?;
        Ok(user.is_admin)
    }
}

#[async_trait]
impl AppProvider for SqlStore {
    async fn find_app(&self, app_id: i32) -> AppResult<App> {
        let model = AppEntity::find_by_id(app_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        model.map(App::from).ok_or_not_found("app")
    }
}
