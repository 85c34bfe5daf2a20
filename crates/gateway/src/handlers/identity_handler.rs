//! Identity handlers.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::AppResult;
use identity_service_lib::usecase::{
    CreateIdentityInput, DeleteIdentityInput, FindIdentityInput, UpdateIdentityInput,
};

use crate::extractors::JsonBody;
use crate::middleware::CurrentIdentity;
use crate::state::AppState;

/// Email and password pair used for sign-up, login and update
#[derive(Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// Email address
    #[schema(example = "user@mail.com")]
    pub email: String,
    /// Password (minimum 5 characters)
    #[schema(example = "12345", min_length = 5)]
    pub password: String,
}

/// Public view of an identity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdentityResponse {
    #[schema(example = "user@mail.com")]
    pub email: String,
}

/// Identifier of an updated identity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdentityIdResponse {
    #[schema(example = "0b9f1c7e-6d1a-4f43-9a55-5a3c1f0f2a11")]
    pub id: String,
}

/// Register a new identity
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Identities",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Identity created"),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already used. Reported as 409 Conflict, not 400; clients should treat any 4xx here as a rejected email"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create_identity(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> AppResult<StatusCode> {
    state
        .identities
        .create
        .execute(CreateIdentityInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get the caller's identity
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Identities",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's email", body = IdentityResponse),
        (status = 400, description = "Identity does not exist"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn find_identity(
    Extension(current): Extension<CurrentIdentity>,
    State(state): State<AppState>,
) -> AppResult<Json<IdentityResponse>> {
    let output = state
        .identities
        .find
        .execute(FindIdentityInput { id: current.id })
        .await?;

    Ok(Json(IdentityResponse {
        email: output.email,
    }))
}

/// Replace the caller's email and password
#[utoipa::path(
    put,
    path = "/api/v1/users",
    tag = "Identities",
    security(("bearer_auth" = [])),
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Identity updated", body = IdentityIdResponse),
        (status = 400, description = "Invalid data or identity does not exist"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Email already used. Reported as 409 Conflict, not 400; clients should treat any 4xx here as a rejected email")
    )
)]
pub async fn update_identity(
    Extension(current): Extension<CurrentIdentity>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> AppResult<Json<IdentityIdResponse>> {
    let output = state
        .identities
        .update
        .execute(UpdateIdentityInput {
            id: current.id,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(IdentityIdResponse { id: output.id }))
}

/// Delete the caller's identity
#[utoipa::path(
    delete,
    path = "/api/v1/users",
    tag = "Identities",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Identity deleted"),
        (status = 400, description = "Identity does not exist"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_identity(
    Extension(current): Extension<CurrentIdentity>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state
        .identities
        .delete
        .execute(DeleteIdentityInput { id: current.id })
        .await?;

    Ok(StatusCode::OK)
}
