use serde::{Deserialize, Serialize};

use super::serialize_duration;

/// Query string of the log route. Everything is kept as text so that a bad
/// value becomes a validation error instead of an extractor rejection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogParams {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl ExerciseLog {
    pub fn new<T: Into<String>>(username: T, log: Vec<LogEntry>) -> Self {
        Self {
            username: username.into(),
            count: log.len(),
            log,
        }
    }
}
