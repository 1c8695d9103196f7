use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{call_date, CallStatus, StoredRecord};
use crate::database::Collection;

pub const DEFAULT_MISSED_CALL_REASON: &str = "Employee unavailable";

fn default_reason() -> Option<String> {
    Some(DEFAULT_MISSED_CALL_REASON.to_string())
}

/// POST /api/missed-call body
///
/// An absent `reason` takes the default; an explicit `null` is kept as null.
#[derive(Debug, Clone, Deserialize)]
pub struct MissedCallInput {
    pub phone_number: String,
    #[serde(default = "default_reason")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissedCallRecord {
    pub phone_number: String,
    pub reason: Option<String>,
    pub call_status: CallStatus,
    pub call_date: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MissedCallRecord {
    pub fn from_input(input: MissedCallInput, now: DateTime<Utc>) -> Self {
        Self {
            phone_number: input.phone_number,
            reason: input.reason,
            call_status: CallStatus::Missed,
            call_date: call_date(now),
            created_at: now,
        }
    }
}

impl StoredRecord for MissedCallRecord {
    const COLLECTION: Collection = Collection::MissedCalls;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reason_defaults_when_absent() {
        let input: MissedCallInput =
            serde_json::from_value(json!({ "phone_number": "+911234567890" })).unwrap();
        assert_eq!(input.reason.as_deref(), Some(DEFAULT_MISSED_CALL_REASON));

        let record = MissedCallRecord::from_input(input, Utc::now());
        assert_eq!(record.reason.as_deref(), Some("Employee unavailable"));
        assert_eq!(record.call_status, CallStatus::Missed);
    }

    #[test]
    fn explicit_reason_and_null_are_kept() {
        let input: MissedCallInput = serde_json::from_value(
            json!({ "phone_number": "+911234567890", "reason": "Network issue" }),
        )
        .unwrap();
        assert_eq!(input.reason.as_deref(), Some("Network issue"));

        let input: MissedCallInput =
            serde_json::from_value(json!({ "phone_number": "+911234567890", "reason": null }))
                .unwrap();
        assert_eq!(input.reason, None);
    }

    #[test]
    fn phone_number_is_required() {
        assert!(serde_json::from_value::<MissedCallInput>(json!({ "reason": "x" })).is_err());
        assert!(serde_json::from_value::<MissedCallInput>(json!({ "phone_number": 9876 })).is_err());
    }
}
