use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        controller::util::{IdPath, RowId}, error::AppError, service::planet::PlanetService,
        state::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    let planets_dto: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = u32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(RowId(id)): IdPath<RowId>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .get_planet(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
