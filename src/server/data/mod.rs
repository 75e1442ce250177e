//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every insert and delete is a single statement committed on its own.

pub mod character;
pub mod character_fav;
pub mod planet;
pub mod planet_fav;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Returns true when the error was raised by a unique index or constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
