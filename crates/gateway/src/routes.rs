//! Route configuration.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    create_identity, delete_identity, find_identity, health_check, login, update_identity,
};
use crate::middleware::{auth_middleware, echo_auth_token};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Base path for the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Layers run outermost-last: auth first, then the echo wrapper.
    let authenticated = get(find_identity)
        .put(update_identity)
        .delete(delete_identity)
        .route_layer(middleware::from_fn(echo_auth_token))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api = Router::new()
        .route("/login", post(login))
        .route("/users", post(create_identity).merge(authenticated));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health_check))
        .nest(API_PREFIX, api)
        // Swagger UI
        .merge(
            SwaggerUi::new(format!("{}/docs", API_PREFIX))
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
