//! Factories for favorite-link rows.
//!
//! Both referenced rows must already exist; SQLite enforces the foreign keys.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to a planet.
pub async fn create_planet_fav(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::planet_fav::Model, DbErr> {
    entity::planet_fav::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a character.
pub async fn create_character_fav(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::character_fav::Model, DbErr> {
    entity::character_fav::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
