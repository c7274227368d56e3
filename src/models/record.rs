use crate::models::help_status::HelpStatus;
use crate::models::mood::Mood;
use serde::{Deserialize, Serialize};

/// Column order of the per-user CSV log.
pub const LOG_HEADERS: [&str; 6] = [
    "timestamp",
    "mood",
    "help_status",
    "entry",
    "probability",
    "prediction",
];

/// Timestamp layout used when writing new rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of a user's journal log.
///
/// `timestamp` is kept as written in the file: rows whose timestamp does not
/// parse are still part of the log and only disappear from the trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub mood: Mood,
    pub help_status: HelpStatus,
    pub entry: String,
    pub probability: f64,
    pub prediction: String,
}

impl LogRecord {
    /// Render as a table row (same column order as [`LOG_HEADERS`]).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            format!("{} {}", self.mood.icon(), self.mood),
            self.help_status.to_string(),
            self.entry.clone(),
            format!("{:.2}", self.probability),
            self.prediction.clone(),
        ]
    }
}
