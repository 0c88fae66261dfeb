//! Build domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One execution of a job
///
/// The CI API reports start and end times as unix seconds; they are held as
/// UTC timestamps here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Numeric identifier, used to look up the build's resources
    pub id: i64,

    /// Name of the build within its job (usually a counter such as "3")
    pub name: String,

    pub status: BuildStatus,

    #[serde(default)]
    pub job_name: Option<String>,

    #[serde(default)]
    pub pipeline_name: Option<String>,

    #[serde(default)]
    pub api_url: String,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_time: Option<DateTime<Utc>>,
}

impl Build {
    /// Wall-clock duration of a finished build
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}

/// Build lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Pending,
    Started,
    Succeeded,
    Failed,
    Errored,
    Aborted,
}

impl BuildStatus {
    /// Lowercase name as used by the API and by page styling
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Pending => "pending",
            BuildStatus::Started => "started",
            BuildStatus::Succeeded => "succeeded",
            BuildStatus::Failed => "failed",
            BuildStatus::Errored => "errored",
            BuildStatus::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
