use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::{IdPath, RowId}, error::AppError, model::user::CreateUserParam,
        service::user::UserService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /users - List every registered user
///
/// # Returns
/// - `200 OK`: JSON array of UserDto ordered by id (empty when no users exist)
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/{id} - Get a single user
///
/// # Returns
/// - `200 OK`: UserDto
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(RowId(id)): IdPath<RowId>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /users - Register a new user
///
/// Requires non-empty `email`, `password` and `name`. The password is stored as an
/// Argon2id hash and never returned.
///
/// # Returns
/// - `201 Created`: The new UserDto
/// - `400 Bad Request`: Body is not valid JSON, or a required field is missing
/// - `409 Conflict`: Email already registered
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Missing required field or malformed body", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let user = UserService::new(&state.db)
        .create_user(CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
