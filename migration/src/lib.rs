pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_user_table;
mod m20251016_000002_create_planet_table;
mod m20251016_000003_create_character_table;
mod m20251016_000004_create_planet_fav_table;
mod m20251016_000005_create_character_fav_table;
mod m20251016_000006_seed_planets_and_characters;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_user_table::Migration),
            Box::new(m20251016_000002_create_planet_table::Migration),
            Box::new(m20251016_000003_create_character_table::Migration),
            Box::new(m20251016_000004_create_planet_fav_table::Migration),
            Box::new(m20251016_000005_create_character_fav_table::Migration),
            Box::new(m20251016_000006_seed_planets_and_characters::Migration),
        ]
    }
}
