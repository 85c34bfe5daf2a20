//! Authentication handlers.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderValue},
    response::{IntoResponse, Json},
};

use common::{AppError, AppResult};
use identity_service_lib::usecase::AuthenticateInput;

use crate::extractors::JsonBody;
use crate::handlers::identity_handler::CredentialsRequest;
use crate::state::AppState;
use crate::token::{TokenResponse, BEARER_TOKEN_PREFIX};

/// Login and get a JWT
///
/// The token is returned both in the `Authorization` response header and
/// in the body.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse,
            headers(("Authorization" = String, description = "Bearer token"))),
        (status = 400, description = "Invalid email or password shape"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let output = state
        .identities
        .authenticate
        .execute(AuthenticateInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let token = state.tokens.issue(&output.id)?;
    let header = HeaderValue::from_str(&format!("{}{}", BEARER_TOKEN_PREFIX, token.access_token))
        .map_err(|e| AppError::internal(format!("token header: {}", e)))?;

    Ok(([(AUTHORIZATION, header)], Json(token)))
}
