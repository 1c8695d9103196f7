use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bson::Document;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::format::documents_to_values;

/// Serializable response body with an optional non-200 status
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub body: T,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(body: T) -> Self {
        Self {
            body,
            status_code: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(body: T, status_code: StatusCode) -> Self {
        Self {
            body,
            status_code: Some(status_code),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let body = match serde_json::to_value(&self.body) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response body: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Failed to serialize response" })),
                )
                    .into_response();
            }
        };

        (status, Json(body)).into_response()
    }
}

/// `{success, message, id?}` returned by every write endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SaveResponse {
    pub fn saved(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            id: None,
        }
    }

    pub fn saved_with_id(message: &'static str, id: String) -> Self {
        Self {
            success: true,
            message,
            id: Some(id),
        }
    }
}

/// `{success, total, data}` returned by every list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub total: usize,
    pub data: Vec<Value>,
}

impl ListResponse {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let data = documents_to_values(documents);
        Self {
            success: true,
            total: data.len(),
            data,
        }
    }
}

// Convenience type aliases
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
