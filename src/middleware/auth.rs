use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::API_KEY_HEADER;
use crate::error::ApiError;
use crate::state::AppState;

/// Rejects the request with 401 unless `x-api-key` matches the shared secret.
///
/// Runs before any extractor of the wrapped handler, so the body is never
/// parsed and the store is never touched for unauthenticated requests.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(provided) = headers.get(API_KEY_HEADER) else {
        tracing::warn!("Rejected {} {}: missing {} header", request.method(), request.uri().path(), API_KEY_HEADER);
        return Err(ApiError::unauthorized("Unauthorized"));
    };

    if !state.api_key.verify(provided.as_bytes()) {
        tracing::warn!("Rejected {} {}: invalid API key", request.method(), request.uri().path());
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    Ok(next.run(request).await)
}
