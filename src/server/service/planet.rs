//! Planet catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet ordered by id.
    pub async fn get_all_planets(&self) -> Result<Vec<Planet>, AppError> {
        let planets = PlanetRepository::new(self.db).get_all().await?;
        Ok(planets)
    }

    /// Retrieves a planet by id.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<Planet>, AppError> {
        let planet = PlanetRepository::new(self.db).find_by_id(planet_id).await?;
        Ok(planet)
    }
}
