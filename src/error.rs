// HTTP API Error Types
use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::database::DatabaseError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 415 Unsupported Media Type
    UnsupportedMediaType(String),

    // 422 Unprocessable Entity (well-formed JSON that does not match the input shape)
    UnprocessableEntity(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidJson(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::PayloadTooLarge(msg) => msg,
            ApiError::UnsupportedMediaType(msg) => msg,
            ApiError::UnprocessableEntity(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "detail": self.message() })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        ApiError::UnsupportedMediaType(message.into())
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        ApiError::UnprocessableEntity(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::unprocessable_entity(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::invalid_json(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => {
                ApiError::unsupported_media_type(e.body_text())
            }
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ApiError::payload_too_large(other.body_text())
            }
            other => ApiError::bad_request(other.body_text()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large(rejection.body_text())
        } else {
            ApiError::bad_request(rejection.body_text())
        }
    }
}

// Bodies sent without a Content-Type are parsed directly with serde_json
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => ApiError::unprocessable_entity(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                err
            )),
            _ => ApiError::invalid_json(format!(
                "Failed to parse the request body as JSON: {}",
                err
            )),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Unavailable(msg) => {
                tracing::error!("Document store unavailable: {}", msg);
                ApiError::internal_server_error("Database temporarily unavailable")
            }
            DatabaseError::Serialization(msg) => {
                tracing::error!("Document serialization error: {}", msg);
                ApiError::internal_server_error("Failed to encode record")
            }
            DatabaseError::Mongo(mongo_err) => {
                // Log the real error but return generic message
                tracing::error!("MongoDB error: {}", mongo_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
