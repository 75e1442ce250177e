use sea_orm_migration::prelude::*;

use super::{
    m20251016_000002_create_planet_table::Planet,
    m20251016_000003_create_character_table::Character,
};

/// (name, climate, terrain, population, diameter, gravity)
const PLANETS: &[(&str, &str, &str, Option<i64>, i32, &str)] = &[
    ("Alderaan", "temperate", "grasslands, mountains", Some(2_000_000_000), 12500, "1 standard"),
    ("Yavin IV", "temperate, tropical", "jungle, rainforests", Some(1000), 10200, "1 standard"),
    ("Tatooine", "arid", "desert", Some(200_000), 10465, "1 standard"),
    ("Hoth", "frozen", "tundra, ice caves, mountain ranges", None, 7200, "1.1 standard"),
    ("Dagobah", "murky", "swamp, jungles", None, 8900, "N/A"),
    ("Bespin", "temperate", "gas giant", Some(6_000_000), 118000, "1.5 (surface), 1 standard (Cloud City)"),
    ("Endor", "temperate", "forests, mountains, lakes", Some(30_000_000), 4900, "0.85 standard"),
    ("Naboo", "temperate", "grassy hills, swamps, forests, mountains", Some(4_500_000_000), 12120, "1 standard"),
];

/// (name, data as JSON text)
const CHARACTERS: &[(&str, &str)] = &[
    ("Luke Skywalker", r#"{"height":172,"mass":77,"species":"Human","homeworld":"Tatooine"}"#),
    ("Darth Vader", r#"{"height":202,"mass":136,"species":"Human","homeworld":"Tatooine"}"#),
    ("Leia Organa", r#"{"height":150,"mass":49,"species":"Human","homeworld":"Alderaan"}"#),
    ("Han Solo", r#"{"height":180,"mass":80,"species":"Human","homeworld":"Corellia"}"#),
    ("Yoda", r#"{"height":66,"mass":17,"species":"Yoda's species","homeworld":null}"#),
    ("R2-D2", r#"{"height":96,"mass":32,"species":"Droid","homeworld":"Naboo"}"#),
    ("C-3PO", r#"{"height":167,"mass":75,"species":"Droid","homeworld":"Tatooine"}"#),
    ("Obi-Wan Kenobi", r#"{"height":182,"mass":77,"species":"Human","homeworld":"Stewjon"}"#),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut planets = Query::insert()
            .into_table(Planet::Table)
            .columns([
                Planet::Name,
                Planet::Climate,
                Planet::Terrain,
                Planet::Population,
                Planet::Diameter,
                Planet::Gravity,
            ])
            .to_owned();

        for (name, climate, terrain, population, diameter, gravity) in PLANETS {
            planets.values_panic([
                (*name).into(),
                (*climate).into(),
                (*terrain).into(),
                (*population).into(),
                (*diameter).into(),
                (*gravity).into(),
            ]);
        }

        manager.exec_stmt(planets).await?;

        let mut characters = Query::insert()
            .into_table(Character::Table)
            .columns([Character::Name, Character::Data])
            .to_owned();

        for (name, data) in CHARACTERS {
            characters.values_panic([(*name).into(), (*data).into()]);
        }

        manager.exec_stmt(characters).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Character::Table).to_owned())
            .await?;

        manager
            .exec_stmt(Query::delete().from_table(Planet::Table).to_owned())
            .await
    }
}
