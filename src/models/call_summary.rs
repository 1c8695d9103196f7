use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoredRecord;
use crate::database::Collection;

/// POST /api/save-summary body
#[derive(Debug, Clone, Deserialize)]
pub struct CallSummaryInput {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSummaryRecord {
    pub summary: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl CallSummaryRecord {
    pub fn from_input(input: CallSummaryInput, now: DateTime<Utc>) -> Self {
        Self {
            summary: input.summary,
            created_at: now,
        }
    }
}

impl StoredRecord for CallSummaryRecord {
    const COLLECTION: Collection = Collection::CallSummaries;
}
