//! HTTP controller endpoints for the holonet web API.
//!
//! This module contains Axum handlers for users, the planet and character catalogs,
//! and user favorites. Controllers extract path ids and bodies, call a service, and
//! convert the returned domain models into DTOs. Every handler is annotated with utoipa
//! for OpenAPI documentation.

pub mod character;
pub mod favorite;
pub mod health;
pub mod planet;
pub mod user;
pub mod util;
