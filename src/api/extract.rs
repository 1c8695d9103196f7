// api/extract.rs - JSON request bodies

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that also accepts requests without a `Content-Type`
///
/// A declared content type must be JSON (otherwise 415). An absent one means
/// the raw bytes are parsed as JSON. Rejections are already `ApiError`s, so
/// handlers take `JsonBody(input)` directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(JsonBody(value));
        }

        let bytes = Bytes::from_request(req, state).await?;
        Ok(JsonBody(serde_json::from_slice(&bytes)?))
    }
}
