//! Repository for user-to-character favorite links.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{character::Character, favorite::CharacterFav};

pub struct CharacterFavRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterFavRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a link between a user and a character.
    pub async fn create(&self, user_id: i32, character_id: i32) -> Result<CharacterFav, DbErr> {
        let entity = entity::character_fav::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CharacterFav::from_entity(entity))
    }

    /// Lists every character link held by a user, oldest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<CharacterFav>, DbErr> {
        let entities = entity::prelude::CharacterFav::find()
            .filter(entity::character_fav::Column::UserId.eq(user_id))
            .order_by_asc(entity::character_fav::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CharacterFav::from_entity).collect())
    }

    /// Resolves the characters a user has favorited, in link order.
    pub async fn get_characters_by_user_id(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let rows = entity::prelude::CharacterFav::find()
            .filter(entity::character_fav::Column::UserId.eq(user_id))
            .order_by_asc(entity::character_fav::Column::Id)
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, character)| character.map(Character::from_entity))
            .collect())
    }

    /// Deletes a link by id.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CharacterFav::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
