//! Request shapes and the records they map to
//!
//! Each input type is validated by serde at the HTTP boundary. Each record
//! type is what actually lands in the store: server-assigned fields
//! (`call_status`, `call_date`, `created_at`) are filled in here and are
//! never read from the client.

pub mod call_summary;
pub mod daily_update;
pub mod missed_call;

use bson::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Collection, DatabaseError};

pub use call_summary::{CallSummaryInput, CallSummaryRecord};
pub use daily_update::{DailyUpdateInput, DailyUpdateRecord, HasQuery};
pub use missed_call::{MissedCallInput, MissedCallRecord, DEFAULT_MISSED_CALL_REASON};

/// A record type persisted to exactly one collection
pub trait StoredRecord: Serialize {
    const COLLECTION: Collection;

    fn to_document(&self) -> Result<Document, DatabaseError> {
        Ok(bson::to_document(self)?)
    }
}

/// Outcome recorded on call-tracking records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Completed,
    Missed,
}

/// UTC calendar date in `YYYY-MM-DD` form
pub fn call_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}
