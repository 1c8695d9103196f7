// handlers/missed_calls.rs - missed call endpoints

use axum::extract::State;
use chrono::Utc;

use crate::api::JsonBody;
use crate::database::{Collection, FindQuery};
use crate::middleware::{ApiResponse, ApiResult, ListResponse, SaveResponse};
use crate::models::{MissedCallInput, MissedCallRecord, StoredRecord};
use crate::state::AppState;

pub const MISSED_CALL_MESSAGE: &str = "Missed call logged";

/// POST /api/missed-call
pub async fn log_missed_call(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MissedCallInput>,
) -> ApiResult<SaveResponse> {
    let record = MissedCallRecord::from_input(input, Utc::now());
    let id = state
        .store
        .insert_one(MissedCallRecord::COLLECTION, record.to_document()?)
        .await?;

    tracing::info!("Logged missed call {} for {}", id, record.phone_number);
    Ok(ApiResponse::success(SaveResponse::saved(MISSED_CALL_MESSAGE)))
}

/// GET /api/missed-calls
pub async fn list_missed_calls(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let documents = state
        .store
        .find(Collection::MissedCalls, FindQuery::all())
        .await?;

    Ok(ApiResponse::success(ListResponse::from_documents(documents)))
}
