//! Job domain types

use serde::{Deserialize, Serialize};

use crate::domain::build::Build;

/// Job definition as reported by the CI API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,

    #[serde(default)]
    pub pipeline_name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub paused: bool,

    #[serde(default)]
    pub disable_manual_trigger: bool,

    /// Build currently pending or running, if any
    #[serde(default)]
    pub next_build: Option<Build>,

    /// Most recently finished build, if any
    #[serde(default)]
    pub finished_build: Option<Build>,

    #[serde(default)]
    pub inputs: Vec<JobInput>,

    #[serde(default)]
    pub outputs: Vec<JobOutput>,

    /// Names of the pipeline groups this job is listed in
    #[serde(default)]
    pub groups: Vec<String>,
}

/// A resource the job consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInput {
    pub name: String,
    pub resource: String,
    #[serde(default)]
    pub trigger: bool,
    /// Jobs a version must have passed through before it is used here
    #[serde(default)]
    pub passed: Vec<String>,
}

/// A resource the job produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutput {
    pub name: String,
    pub resource: String,
}
