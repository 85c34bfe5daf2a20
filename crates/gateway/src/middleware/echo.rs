//! Echo the caller's bearer token back on successful responses.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

pub async fn echo_auth_token(request: Request<Body>, next: Next) -> Response {
    let authorization = request.headers().get(AUTHORIZATION).cloned();

    let mut response = next.run(request).await;

    if response.status().is_success() {
        if let Some(value) = authorization {
            response.headers_mut().insert(AUTHORIZATION, value);
        }
    }
    response
}
