//! User domain models and parameters.
//!
//! Provides the domain model for registered users and the parameter types used when
//! creating them. The stored password hash is dropped at the repository boundary and
//! never reaches the service or controller layers.

use chrono::NaiveDate;

use crate::model::user::{CreateUserDto, UserDto};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Email address, unique across users.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Date the user registered.
    pub date_register: NaiveDate,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            date_register: self.date_register,
            is_active: self.is_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            date_register: entity.date_register,
            is_active: entity.is_active,
        }
    }
}

/// Unvalidated user creation request.
///
/// Fields stay optional until the service checks them so that the first missing
/// field can be named in the error.
#[derive(Debug, Clone, Default)]
pub struct CreateUserParam {
    pub email: Option<serde_json::Value>,
    pub password: Option<serde_json::Value>,
    pub name: Option<serde_json::Value>,
}

impl CreateUserParam {
    /// Converts the request body DTO into creation parameters.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
        }
    }
}

/// Validated user ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewUserParam {
    pub email: String,
    /// Argon2id PHC hash of the submitted password.
    pub password_hash: String,
    pub name: String,
    pub date_register: NaiveDate,
}
