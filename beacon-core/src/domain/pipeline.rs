//! Pipeline domain types

use serde::{Deserialize, Serialize};

/// Pipeline configuration as reported by the CI API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub paused: bool,

    /// Groups in their declared order
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// A named subset of a pipeline's jobs, used to organize the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl GroupConfig {
    /// Whether the named job is listed in this group
    pub fn contains_job(&self, job_name: &str) -> bool {
        self.jobs.iter().any(|job| job == job_name)
    }
}
