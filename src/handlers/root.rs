// handlers/root.rs - unauthenticated liveness endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::state::AppState;

pub const ROOT_STATUS: &str = "Voxara NBFC Backend Running";

/// GET / - process liveness, never touches the store
pub async fn root() -> Json<Value> {
    Json(json!({ "status": ROOT_STATUS }))
}

/// GET /health - liveness plus a store round-trip
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => ApiResponse::success(json!({
            "success": true,
            "data": {
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            }
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unavailable"
                    }
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}
