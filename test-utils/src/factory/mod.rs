//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!     let link = factory::create_planet_fav(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .climate("arid")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `character` - Create character entities
//! - `favorite` - Create planet/character favorite links
//! - `helpers` - Unique id generation

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use favorite::{create_character_fav, create_planet_fav};
pub use planet::create_planet;
pub use user::create_user;
