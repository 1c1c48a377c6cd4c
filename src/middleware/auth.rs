use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::auth;
use crate::error::ApiError;
use crate::scope::ScopeContext;

/// Authenticates the request and injects the caller's [`ScopeContext`] into
/// request extensions for downstream handlers.
pub async fn scope_context_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = auth::validate_jwt(&token).map_err(|e| ApiError::unauthorized(e.to_string()))?;

    let context = ScopeContext::from(claims);
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
