//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa specification. The collected
//! OpenAPI document is served at `/api/docs/openapi.json` and browsable through Swagger UI
//! at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness check
/// - `GET /users`, `POST /users` - List and register users
/// - `GET /users/{id}` - Get a user
/// - `GET /planets`, `GET /planets/{id}` - Planet catalog
/// - `GET /characters`, `GET /characters/{id}` - Character catalog
/// - `GET /users/{user_id}/favorites` - List a user's favorites
/// - `POST|DELETE /users/{user_id}/favorites/planets/{planet_id}` - Manage favorite planets
/// - `POST|DELETE /users/{user_id}/favorites/characters/{character_id}` - Manage favorite characters
///
/// Unknown routes fall back to 404 `{"error":"Not found"}`.
///
/// # Returns
/// An Axum `Router<AppState>` with request tracing and permissive CORS applied, ready
/// to receive its state.
///
/// # Example
/// ```ignore
/// let app = router().with_state(AppState::new(db));
/// axum::serve(listener, app).await?;
/// ```
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::user::USER_TAG, description = "User registration and lookup"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorite planets and characters"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::planet::list_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::character::list_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::favorite::list_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::util::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
