use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::errors::ApiError;
use crate::auth::jwt::verify_token;

/// Secret used to verify bearer tokens on protected routes
#[derive(Clone)]
pub struct BearerAuth {
    secret: Arc<str>,
}

impl BearerAuth {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

/// Subject of the verified token, inserted into request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

/// JWT authentication layer for protected routes
///
/// Usage:
/// ```rust,ignore
/// let routes = routes.route_layer(axum::middleware::from_fn_with_state(
///     BearerAuth::new(secret),
///     require_bearer,
/// ));
/// ```
pub async fn require_bearer(
    State(auth): State<BearerAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let claims = verify_token(token, &auth.secret)
        .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

    request
        .extensions_mut()
        .insert(AuthenticatedSubject(claims.sub));

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    // Extract the authorization header
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>"))
}
