use super::*;

/// Tests finding a planet with its descriptive fields.
///
/// Verifies optional fields round-trip, including ones left unset.
///
/// Expected: Ok(Some) with all fields, Ok(None) for an unknown id
#[tokio::test]
async fn finds_planet_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .climate("arid")
        .terrain("desert")
        .population(200000)
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate.as_deref(), Some("arid"));
    assert_eq!(planet.terrain.as_deref(), Some("desert"));
    assert_eq!(planet.population, Some(200000));
    assert_eq!(planet.diameter, None);
    assert!(repo.find_by_id(created.id + 1).await?.is_none());

    Ok(())
}
