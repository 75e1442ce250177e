use super::*;

/// Tests listing planets.
///
/// Expected: Ok with planets in id order
#[tokio::test]
async fn lists_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::planet::create_planet_named(db, "Yavin IV").await?;
    factory::planet::create_planet_named(db, "Alderaan").await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Yavin IV", "Alderaan"]);

    Ok(())
}
