//! Basic auth middleware

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AppError;
use crate::AppState;

/// Decode the username/password pair from a `Basic` Authorization header.
fn extract_credentials(request: &Request<Body>) -> Option<(String, String)> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

/// Authentication middleware for the user routes.
///
/// Compares the request's basic auth credentials against the configured
/// pair. When no credentials are configured the check is skipped entirely,
/// with a warning, so local setups keep working.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some((expected_user, expected_pass)) = state.config.basic_auth() else {
        tracing::warn!("BASIC_AUTH environment variables not set, skipping authentication");
        return Ok(next.run(request).await);
    };

    let (user, pass) = extract_credentials(&request).ok_or(AppError::Unauthorized)?;
    if user != expected_user || pass != expected_pass {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
