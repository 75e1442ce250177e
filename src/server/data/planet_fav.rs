//! Repository for user-to-planet favorite links.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{favorite::PlanetFav, planet::Planet};

pub struct PlanetFavRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetFavRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a link between a user and a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetFav)` - The created link
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair
    ///   already exists or a foreign key violation when either side is missing
    pub async fn create(&self, user_id: i32, planet_id: i32) -> Result<PlanetFav, DbErr> {
        let entity = entity::planet_fav::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlanetFav::from_entity(entity))
    }

    /// Lists every planet link held by a user, oldest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<PlanetFav>, DbErr> {
        let entities = entity::prelude::PlanetFav::find()
            .filter(entity::planet_fav::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet_fav::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlanetFav::from_entity).collect())
    }

    /// Resolves the planets a user has favorited, in link order.
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let rows = entity::prelude::PlanetFav::find()
            .filter(entity::planet_fav::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet_fav::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, planet)| planet.map(Planet::from_entity))
            .collect())
    }

    /// Deletes a link by id.
    ///
    /// Returns OK regardless of the link existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PlanetFav::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
