use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Everything a user has marked as favorite, grouped by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub planets: Vec<PlanetDto>,
    pub characters: Vec<CharacterDto>,
}
