// handlers/updates.rs - daily update endpoints

use axum::extract::State;
use bson::doc;
use chrono::Utc;

use crate::api::JsonBody;
use crate::database::{Collection, FindQuery};
use crate::middleware::{ApiResponse, ApiResult, ListResponse, SaveResponse};
use crate::models::{DailyUpdateInput, DailyUpdateRecord, HasQuery, StoredRecord};
use crate::state::AppState;

pub const SAVE_UPDATE_MESSAGE: &str = "Saved to MongoDB Atlas";

/// Fields returned by GET /api/queries
pub const FLAGGED_QUERY_FIELDS: &[&str] = &["employee_name", "employee_query", "call_date"];

/// POST /api/save-update - store one completed-call report and return its id
pub async fn save_update(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DailyUpdateInput>,
) -> ApiResult<SaveResponse> {
    let record = DailyUpdateRecord::from_input(input, Utc::now());
    let id = state
        .store
        .insert_one(DailyUpdateRecord::COLLECTION, record.to_document()?)
        .await?;

    tracing::info!(
        "Saved daily update {} for {} (has_query={})",
        id,
        record.employee_name,
        record.has_query.as_str()
    );
    Ok(ApiResponse::success(SaveResponse::saved_with_id(
        SAVE_UPDATE_MESSAGE,
        id,
    )))
}

/// GET /api/updates - every daily update
pub async fn list_updates(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let documents = state
        .store
        .find(Collection::DailyUpdates, FindQuery::all())
        .await?;

    Ok(ApiResponse::success(ListResponse::from_documents(documents)))
}

/// GET /api/queries - flagged updates, reduced to who asked what and when
pub async fn list_queries(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let query = FindQuery::matching(doc! { "has_query": HasQuery::YES })
        .fields(FLAGGED_QUERY_FIELDS);
    let documents = state.store.find(Collection::DailyUpdates, query).await?;

    Ok(ApiResponse::success(ListResponse::from_documents(documents)))
}
