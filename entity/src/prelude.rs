pub use super::character::Entity as Character;
pub use super::character_fav::Entity as CharacterFav;
pub use super::planet::Entity as Planet;
pub use super::planet_fav::Entity as PlanetFav;
pub use super::user::Entity as User;
