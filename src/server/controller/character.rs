use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        controller::util::{IdPath, RowId}, error::AppError, service::character::CharacterService,
        state::AppState,
    },
};

pub static CHARACTER_TAG: &str = "character";

#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db)
        .get_all_characters()
        .await?;

    let characters_dto: Vec<CharacterDto> =
        characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = u32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(RowId(id)): IdPath<RowId>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_character(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
