//! SeaORM entity definitions for the holonet schema.

pub mod prelude;

pub mod character;
pub mod character_fav;
pub mod planet;
pub mod planet_fav;
pub mod user;
