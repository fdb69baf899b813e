use serde::{Deserialize, Serialize};
use serde_json::Value;

// Requested scheduling window in minutes from midnight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRange {
    pub start_time: i32,
    pub end_time: i32,
}

/// Request body for the schedule generation endpoint.
///
/// The companies and students documents are opaque to this client; the
/// scheduling service is the one that interprets their fields, so they are
/// carried through as raw JSON values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub time_slot: TimeSlotRange,
    pub companies: Value,
    pub students: Value,
}

// One scheduled interview as reported by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub student_id: String,
    pub company_name: String,
    pub round: i32,
    pub start_time: i32,
    pub end_time: i32,
    pub panel_id: i32,
}

/// Summary counters extracted from a result payload.
///
/// Every field defaults to zero independently: an absent `statistics`
/// object, an absent sub-field, and a sub-field of the wrong JSON type all
/// read as the default for that one field without disturbing the others.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub total_interviews: i64,
    pub total_conflicts: i64,
    pub success_rate: f64,
}

impl Statistics {
    pub fn from_result(result: &Value) -> Self {
        let stats = result.get("statistics");
        Self {
            total_interviews: stat_i64(stats, "totalInterviews"),
            total_conflicts: stat_i64(stats, "totalConflicts"),
            success_rate: stat_f64(stats, "successRate"),
        }
    }
}

fn stat_i64(stats: Option<&Value>, key: &str) -> i64 {
    stats
        .and_then(|s| s.get(key))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

fn stat_f64(stats: Option<&Value>, key: &str) -> f64 {
    stats
        .and_then(|s| s.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
