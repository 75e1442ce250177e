//! User service for business logic.
//!
//! This module provides the `UserService` for listing, looking up and registering
//! users. Registration validates required fields, rejects duplicate emails and hashes
//! the password before anything is persisted.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParam, NewUserParam, User},
    util::password::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    /// Registers a new user.
    ///
    /// Fields are checked in the order email, password, name and the first one that
    /// is absent or falsy is reported. Once all three are present, each must be a
    /// JSON string. The new user is active and registered today (UTC).
    ///
    /// # Arguments
    /// - `param` - Raw registration fields as received from the client
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - A required field is missing, falsy, or not a string
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::PasswordHashErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        let email = require_field("email", param.email)?;
        let password = require_field("password", param.password)?;
        let name = require_field("name", param.name)?;

        let email = expect_string("email", email)?;
        let password = expect_string("password", password)?;
        let name = expect_string("name", name)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(email_taken());
        }

        let password_hash = hash_password(&password)?;

        let user = user_repo
            .create(NewUserParam {
                email,
                password_hash,
                name,
                date_register: Utc::now().date_naive(),
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    email_taken()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }
}

/// Unwraps a required registration field, treating absent and falsy values as missing.
fn require_field(field: &str, value: Option<Value>) -> Result<Value, AppError> {
    match value {
        Some(value) if !is_falsy(&value) => Ok(value),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

/// `null`, `false`, zero, and empty strings, arrays and objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Called after every presence check, so a missing field is always reported first.
fn expect_string(field: &str, value: Value) -> Result<String, AppError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(AppError::BadRequest(format!(
            "Invalid value for field: {} (expected a string)",
            field
        ))),
    }
}

fn email_taken() -> AppError {
    AppError::Conflict("Email already registered".to_string())
}
