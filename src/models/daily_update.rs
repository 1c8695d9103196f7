use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{call_date, CallStatus, StoredRecord};
use crate::database::Collection;

/// Whether the employee raised a question for the back office.
///
/// Clients send a free-form string. Only the exact literal `"Yes"` flags the
/// update; `"No"` and any other value are accepted and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HasQuery {
    Yes,
    No,
    Other(String),
}

impl HasQuery {
    pub const YES: &'static str = "Yes";
    pub const NO: &'static str = "No";

    pub fn is_yes(&self) -> bool {
        matches!(self, HasQuery::Yes)
    }

    pub fn as_str(&self) -> &str {
        match self {
            HasQuery::Yes => Self::YES,
            HasQuery::No => Self::NO,
            HasQuery::Other(value) => value,
        }
    }
}

impl From<String> for HasQuery {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::YES => HasQuery::Yes,
            Self::NO => HasQuery::No,
            _ => HasQuery::Other(value),
        }
    }
}

impl From<HasQuery> for String {
    fn from(value: HasQuery) -> Self {
        match value {
            HasQuery::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// POST /api/save-update body
#[derive(Debug, Clone, Deserialize)]
pub struct DailyUpdateInput {
    pub employee_name: String,
    pub visits_count: i64,
    pub visit_summary: String,
    pub has_query: HasQuery,
    #[serde(default)]
    pub employee_query: Option<String>,
    pub tomorrow_goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUpdateRecord {
    pub employee_name: String,
    pub visits_count: i64,
    pub visit_summary: String,
    pub has_query: HasQuery,
    pub employee_query: Option<String>,
    pub tomorrow_goal: String,
    pub call_status: CallStatus,
    pub call_date: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl DailyUpdateRecord {
    /// employee_query survives only on flagged updates
    pub fn from_input(input: DailyUpdateInput, now: DateTime<Utc>) -> Self {
        let employee_query = if input.has_query.is_yes() {
            input.employee_query
        } else {
            None
        };

        Self {
            employee_name: input.employee_name,
            visits_count: input.visits_count,
            visit_summary: input.visit_summary,
            has_query: input.has_query,
            employee_query,
            tomorrow_goal: input.tomorrow_goal,
            call_status: CallStatus::Completed,
            call_date: call_date(now),
            created_at: now,
        }
    }
}

impl StoredRecord for DailyUpdateRecord {
    const COLLECTION: Collection = Collection::DailyUpdates;
}
