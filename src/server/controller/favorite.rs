use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoritesDto,
    },
    server::{
        controller::util::{IdPath, RowId}, error::AppError, service::favorite::FavoriteService,
        state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// GET /users/{user_id}/favorites - List a user's favorite planets and characters
///
/// # Returns
/// - `200 OK`: FavoritesDto, each list in the order favorites were added
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    IdPath(RowId(user_id)): IdPath<RowId>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// POST /users/{user_id}/favorites/planets/{planet_id} - Add a favorite planet
///
/// # Returns
/// - `201 Created`: Confirmation message naming the planet
/// - `404 Not Found`: User or planet does not exist
/// - `409 Conflict`: Planet already in the user's favorites
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = u32, Path, description = "User ID"),
        ("planet_id" = u32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Planet already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RowId, RowId)>,
) -> Result<impl IntoResponse, AppError> {
    let (RowId(user_id), RowId(planet_id)) = ids;
    let planet = FavoriteService::new(&state.db)
        .add_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            msg: format!("Planet '{}' added to favorites", planet.name),
        }),
    ))
}

/// DELETE /users/{user_id}/favorites/planets/{planet_id} - Remove a favorite planet
///
/// # Returns
/// - `200 OK`: Confirmation message naming the planet
/// - `404 Not Found`: User or planet does not exist, or planet not in favorites
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = u32, Path, description = "User ID"),
        ("planet_id" = u32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "User or planet not found, or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RowId, RowId)>,
) -> Result<impl IntoResponse, AppError> {
    let (RowId(user_id), RowId(planet_id)) = ids;
    let planet = FavoriteService::new(&state.db)
        .remove_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("Planet '{}' removed from favorites", planet.name),
        }),
    ))
}

/// POST /users/{user_id}/favorites/characters/{character_id} - Add a favorite character
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = u32, Path, description = "User ID"),
        ("character_id" = u32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = MessageDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Character already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RowId, RowId)>,
) -> Result<impl IntoResponse, AppError> {
    let (RowId(user_id), RowId(character_id)) = ids;
    let character = FavoriteService::new(&state.db)
        .add_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            msg: format!("Character '{}' added to favorites", character.name),
        }),
    ))
}

/// DELETE /users/{user_id}/favorites/characters/{character_id} - Remove a favorite character
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = u32, Path, description = "User ID"),
        ("character_id" = u32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 404, description = "User or character not found, or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RowId, RowId)>,
) -> Result<impl IntoResponse, AppError> {
    let (RowId(user_id), RowId(character_id)) = ids;
    let character = FavoriteService::new(&state.db)
        .remove_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("Character '{}' removed from favorites", character.name),
        }),
    ))
}
