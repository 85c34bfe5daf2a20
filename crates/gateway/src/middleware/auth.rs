//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use common::{AppError, OptionExt};

use crate::state::AppState;

/// Caller identity extracted from a verified token.
#[derive(Debug, Clone)]
pub struct CurrentIdentity {
    /// Token subject, passed unparsed to the use cases
    pub id: String,
}

/// Authentication middleware that validates JWT bearer tokens.
///
/// A missing or malformed header, a bad signature and an expired token
/// all produce 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or_unauthorized()?;

    let claims = state.tokens.verify(bearer.token())?;

    request
        .extensions_mut()
        .insert(CurrentIdentity { id: claims.sub });

    Ok(next.run(request).await)
}
