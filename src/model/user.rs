use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub date_register: NaiveDate,
    pub is_active: bool,
}

/// Body of `POST /users`.
///
/// Fields are kept as raw JSON values so that a missing or falsy field (`null`,
/// `false`, `0`, `""`, `[]`, `{}`) is reported by name instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[schema(value_type = Option<String>)]
    pub email: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub password: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub name: Option<serde_json::Value>,
}
