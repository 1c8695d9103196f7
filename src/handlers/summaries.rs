// handlers/summaries.rs - POST /api/save-summary

use axum::extract::State;
use chrono::Utc;

use crate::api::JsonBody;
use crate::middleware::{ApiResponse, ApiResult, SaveResponse};
use crate::models::{CallSummaryInput, CallSummaryRecord, StoredRecord};
use crate::state::AppState;

pub const SAVE_SUMMARY_MESSAGE: &str = "Summary saved";

pub async fn save_summary(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CallSummaryInput>,
) -> ApiResult<SaveResponse> {
    let record = CallSummaryRecord::from_input(input, Utc::now());
    let id = state
        .store
        .insert_one(CallSummaryRecord::COLLECTION, record.to_document()?)
        .await?;

    tracing::info!("Saved call summary {}", id);
    Ok(ApiResponse::success(SaveResponse::saved(SAVE_SUMMARY_MESSAGE)))
}
