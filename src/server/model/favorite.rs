//! Favorite-link domain models.
//!
//! A favorite-link is a join row associating one user with one planet or one
//! character. Links are owned by the user; removing one never touches the
//! referenced planet or character.

use crate::{
    model::favorite::FavoritesDto,
    server::model::{character::Character, planet::Planet},
};

/// Link between a user and a favorited planet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetFav {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl PlanetFav {
    pub fn from_entity(entity: entity::planet_fav::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
        }
    }
}

/// Link between a user and a favorited character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterFav {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl CharacterFav {
    pub fn from_entity(entity: entity::character_fav::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            character_id: entity.character_id,
        }
    }
}

/// Resolved favorites of a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFavorites {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
}

impl UserFavorites {
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            planets: self.planets.into_iter().map(Planet::into_dto).collect(),
            characters: self
                .characters
                .into_iter()
                .map(Character::into_dto)
                .collect(),
        }
    }
}
