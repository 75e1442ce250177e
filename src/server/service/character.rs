//! Character catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

pub struct CharacterService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every character ordered by id.
    pub async fn get_all_characters(&self) -> Result<Vec<Character>, AppError> {
        let characters = CharacterRepository::new(self.db).get_all().await?;
        Ok(characters)
    }

    /// Retrieves a character by id, `None` when it does not exist.
    pub async fn get_character(&self, character_id: i32) -> Result<Option<Character>, AppError> {
        let character = CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?;
        Ok(character)
    }
}
