//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService` which manages the planet and character
//! favorite-links held by a user. Adding a link scans the user's existing links for a
//! duplicate before inserting; removing one scans for the matching link and deletes it
//! by id. The composite unique index on each link table backs the duplicate scan, and a
//! unique violation on insert is reported as the same conflict.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, character_fav::CharacterFavRepository,
        is_unique_violation, planet::PlanetRepository, planet_fav::PlanetFavRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{character::Character, favorite::UserFavorites, planet::Planet},
};

/// Service providing business logic for user favorites.
pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet and character a user has favorited.
    ///
    /// Both lists are in the order the links were created.
    ///
    /// # Returns
    /// - `Ok(Some(UserFavorites))` - User exists, with their favorites (possibly empty)
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<UserFavorites>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let planets = PlanetFavRepository::new(self.db)
            .get_planets_by_user_id(user_id)
            .await?;
        let characters = CharacterFavRepository::new(self.db)
            .get_characters_by_user_id(user_id)
            .await?;

        Ok(Some(UserFavorites {
            planets,
            characters,
        }))
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user adding the favorite
    /// - `planet_id` - Id of the planet to add
    ///
    /// # Returns
    /// - `Ok(Planet)` - The planet now in the user's favorites
    /// - `Err(AppError::NotFound)` - User or planet does not exist
    /// - `Err(AppError::Conflict)` - Planet is already a favorite of this user
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<Planet, AppError> {
        let planet = self.resolve_user_and_planet(user_id, planet_id).await?;
        let fav_repo = PlanetFavRepository::new(self.db);

        let links = fav_repo.get_by_user_id(user_id).await?;
        if links.iter().any(|link| link.planet_id == planet_id) {
            return Err(planet_already_favorite());
        }

        fav_repo
            .create(user_id, planet_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    planet_already_favorite()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::debug!("User {} added planet {} to favorites", user_id, planet_id);

        Ok(planet)
    }

    /// Removes a planet from a user's favorites.
    ///
    /// Only the link row is deleted; the planet itself is untouched.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The planet that was removed
    /// - `Err(AppError::NotFound)` - User or planet does not exist, or the planet is
    ///   not among the user's favorites
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<Planet, AppError> {
        let planet = self.resolve_user_and_planet(user_id, planet_id).await?;
        let fav_repo = PlanetFavRepository::new(self.db);

        let links = fav_repo.get_by_user_id(user_id).await?;
        let Some(link) = links.into_iter().find(|link| link.planet_id == planet_id) else {
            return Err(AppError::NotFound("Planet not in favorites".to_string()));
        };

        fav_repo.delete(link.id).await?;

        tracing::debug!(
            "User {} removed planet {} from favorites",
            user_id,
            planet_id
        );

        Ok(planet)
    }

    /// Adds a character to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character now in the user's favorites
    /// - `Err(AppError::NotFound)` - User or character does not exist
    /// - `Err(AppError::Conflict)` - Character is already a favorite of this user
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Character, AppError> {
        let character = self
            .resolve_user_and_character(user_id, character_id)
            .await?;
        let fav_repo = CharacterFavRepository::new(self.db);

        let links = fav_repo.get_by_user_id(user_id).await?;
        if links.iter().any(|link| link.character_id == character_id) {
            return Err(character_already_favorite());
        }

        fav_repo
            .create(user_id, character_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    character_already_favorite()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::debug!(
            "User {} added character {} to favorites",
            user_id,
            character_id
        );

        Ok(character)
    }

    /// Removes a character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character that was removed
    /// - `Err(AppError::NotFound)` - User or character does not exist, or the character
    ///   is not among the user's favorites
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn remove_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Character, AppError> {
        let character = self
            .resolve_user_and_character(user_id, character_id)
            .await?;
        let fav_repo = CharacterFavRepository::new(self.db);

        let links = fav_repo.get_by_user_id(user_id).await?;
        let Some(link) = links
            .into_iter()
            .find(|link| link.character_id == character_id)
        else {
            return Err(AppError::NotFound("Character not in favorites".to_string()));
        };

        fav_repo.delete(link.id).await?;

        tracing::debug!(
            "User {} removed character {} from favorites",
            user_id,
            character_id
        );

        Ok(character)
    }

    async fn resolve_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Planet, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        let planet = PlanetRepository::new(self.db).find_by_id(planet_id).await?;

        match (user, planet) {
            (Some(_), Some(planet)) => Ok(planet),
            _ => Err(AppError::NotFound("User or Planet not found".to_string())),
        }
    }

    async fn resolve_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Character, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        let character = CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?;

        match (user, character) {
            (Some(_), Some(character)) => Ok(character),
            _ => Err(AppError::NotFound(
                "User or Character not found".to_string(),
            )),
        }
    }
}

fn planet_already_favorite() -> AppError {
    AppError::Conflict("Planet already in favorites".to_string())
}

fn character_already_favorite() -> AppError {
    AppError::Conflict("Character already in favorites".to_string())
}
