use crate::model::character::CharacterDto;

/// Character as exposed by the API.
///
/// Storage-only columns such as `created_at` are not carried past the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub data: serde_json::Value,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            image: self.image,
            data: self.data,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            data: entity.data,
        }
    }
}
