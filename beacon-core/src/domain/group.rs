//! Group states
//!
//! Pages render the pipeline's groups as tabs; a tab is highlighted when the
//! page's subject belongs to that group.

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::GroupConfig;

/// Whether a pipeline group is highlighted on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub name: String,
    pub enabled: bool,
}

/// Compute one state per group, in the groups' declared order
pub fn states<F>(groups: &[GroupConfig], is_enabled: F) -> Vec<GroupState>
where
    F: Fn(&GroupConfig) -> bool,
{
    groups
        .iter()
        .map(|group| GroupState {
            name: group.name.clone(),
            enabled: is_enabled(group),
        })
        .collect()
}

/// Group states for a job page: enabled groups are those listing the job
pub fn job_states(groups: &[GroupConfig], job_name: &str) -> Vec<GroupState> {
    states(groups, |group| group.contains_job(job_name))
}
