//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::identity_handler::{CredentialsRequest, IdentityIdResponse, IdentityResponse};
use crate::token::TokenResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::login,
        crate::handlers::identity_handler::create_identity,
        crate::handlers::identity_handler::find_identity,
        crate::handlers::identity_handler::update_identity,
        crate::handlers::identity_handler::delete_identity,
    ),
    components(
        schemas(
            CredentialsRequest,
            TokenResponse,
            IdentityResponse,
            IdentityIdResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Credential check and token issuance"),
        (name = "Identities", description = "Account creation and self-service management"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::{path::PathItemType, RefOr};

    #[test]
    fn test_document_lists_routes_and_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/v1/login"));
        assert!(doc.paths.paths.contains_key("/api/v1/users"));
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_email_conflict_documented_as_409() {
        let doc = ApiDoc::openapi();
        let users = &doc.paths.paths["/api/v1/users"];

        for method in [PathItemType::Post, PathItemType::Put] {
            let responses = &users.operations[&method].responses.responses;
            match &responses["409"] {
                RefOr::T(response) => {
                    assert!(response.description.contains("409 Conflict, not 400"))
                }
                RefOr::Ref(_) => panic!("409 response should be inline"),
            }
        }
    }
}
