//! Build Page Service
//!
//! Assembles everything the build detail page shows: the job, the requested
//! build, the build's inputs, the job's build history and the pipeline's
//! group tabs.
//!
//! Lookups run in a fixed order and stop at the first failure. Each failure
//! is classified (missing parameters, not found, upstream failure tagged
//! with the step that failed) and logged where it is detected.

use std::collections::HashMap;
use std::sync::Arc;

use beacon_client::{ClientError, DataClient};
use beacon_core::domain::build::Build;
use beacon_core::domain::group::{self, GroupState};
use beacon_core::domain::job::Job;
use beacon_core::domain::resource::PublicBuildInput;
use serde::Serialize;
use thiserror::Error;
use tracing::Instrument;

use crate::render::{RenderError, Renderer};

/// Route parameter naming the pipeline
pub const PIPELINE_NAME_PARAM: &str = "pipeline_name";
/// Route parameter naming the job
pub const JOB_PARAM: &str = "job";
/// Route parameter naming the build
pub const BUILD_PARAM: &str = "build";

// =============================================================================
// Collaborators
// =============================================================================

/// Source of request parameters
///
/// Absent parameters read as the empty string.
pub trait ParameterSource: Sync {
    fn get(&self, name: &str) -> String;
}

impl ParameterSource for HashMap<String, String> {
    fn get(&self, name: &str) -> String {
        HashMap::get(self, name).cloned().unwrap_or_default()
    }
}

/// The pipeline the current request is routed under
///
/// Page headers show this name rather than the one on the fetched pipeline
/// record.
pub trait PipelineContext: Send + Sync {
    fn current_pipeline_name(&self) -> String;
}

/// Pipeline context taken from the request route
#[derive(Debug, Clone)]
pub struct RoutedPipeline {
    name: String,
}

impl RoutedPipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PipelineContext for RoutedPipeline {
    fn current_pipeline_name(&self) -> String {
        self.name.clone()
    }
}

// =============================================================================
// Types
// =============================================================================

/// Everything the build page template needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPage {
    pub group_states: Vec<GroupState>,
    pub job: Job,
    /// The job's build history
    pub builds: Vec<Build>,
    /// The requested build
    pub build: Build,
    pub inputs: Vec<PublicBuildInput>,
    pub pipeline_name: String,
}

/// The validated lookup key of a build page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildNames {
    pub pipeline_name: String,
    pub job_name: String,
    pub build_name: String,
}

impl BuildNames {
    /// Read the three names, rejecting the request if any is empty
    pub fn from_params(params: &dyn ParameterSource) -> Result<Self> {
        let names = Self {
            pipeline_name: params.get(PIPELINE_NAME_PARAM),
            job_name: params.get(JOB_PARAM),
            build_name: params.get(BUILD_PARAM),
        };

        if names.pipeline_name.is_empty()
            || names.job_name.is_empty()
            || names.build_name.is_empty()
        {
            return Err(BuildPageError::MissingParameters);
        }

        Ok(names)
    }
}

/// Upstream lookup a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    LoadJob,
    GetBuild,
    GetBuildResources,
    GetAllBuilds,
    GetPipeline,
}

impl FetchStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStep::LoadJob => "load-job",
            FetchStep::GetBuild => "get-build",
            FetchStep::GetBuildResources => "get-build-resources",
            FetchStep::GetAllBuilds => "get-all-builds",
            FetchStep::GetPipeline => "get-pipeline",
        }
    }
}

impl std::fmt::Display for FetchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service error type
#[derive(Debug, Error)]
pub enum BuildPageError {
    #[error("Missing required parameters")]
    MissingParameters,

    /// The job or the build does not exist
    #[error("Not found")]
    NotFound,

    #[error("Failed to {step}: {source}")]
    Upstream {
        step: FetchStep,
        #[source]
        source: ClientError,
    },

    /// The page could not be rendered from an assembled view model
    #[error("Failed to render build page: {source}")]
    Render {
        #[source]
        source: RenderError,
        page: Box<BuildPage>,
    },
}

pub type Result<T> = std::result::Result<T, BuildPageError>;

// =============================================================================
// Aggregator
// =============================================================================

/// Assembles build pages for one request
pub struct BuildPageAggregator {
    client: Arc<dyn DataClient>,
    context: Arc<dyn PipelineContext>,
}

impl BuildPageAggregator {
    pub fn new(client: Arc<dyn DataClient>, context: Arc<dyn PipelineContext>) -> Self {
        Self { client, context }
    }

    /// Assemble the page and render it
    ///
    /// Rendering happens into a buffer, so a render failure is reported
    /// before anything has been sent to the caller.
    pub async fn handle(
        &self,
        params: &dyn ParameterSource,
        renderer: &dyn Renderer,
    ) -> Result<String> {
        let page = self.assemble(params).await?;

        match renderer.render(&page) {
            Ok(body) => Ok(body),
            Err(source) => {
                let template_data = serde_json::to_string(&page)
                    .unwrap_or_else(|e| format!("<unserializable: {}>", e));
                tracing::error!(
                    fatal = true,
                    error = %source,
                    template_data = %template_data,
                    "Failed to render build page"
                );
                Err(BuildPageError::Render {
                    source,
                    page: Box::new(page),
                })
            }
        }
    }

    /// Fetch and compose the build page view model
    pub async fn assemble(&self, params: &dyn ParameterSource) -> Result<BuildPage> {
        let names = BuildNames::from_params(params).inspect_err(|_| {
            tracing::info!(
                pipeline = %params.get(PIPELINE_NAME_PARAM),
                job = %params.get(JOB_PARAM),
                build = %params.get(BUILD_PARAM),
                "Missing required parameters"
            );
        })?;

        let job = self
            .client
            .job(&names.pipeline_name, &names.job_name)
            .await
            .map_err(|e| upstream_failure(FetchStep::LoadJob, e))?
            .ok_or_else(|| {
                tracing::debug!("Job not found: {}/{}", names.pipeline_name, names.job_name);
                BuildPageError::NotFound
            })?;

        let span = tracing::info_span!("get-build", job = %job.name, build = %names.build_name);
        self.assemble_for_job(&names, job).instrument(span).await
    }

    async fn assemble_for_job(&self, names: &BuildNames, job: Job) -> Result<BuildPage> {
        let build = self
            .client
            .job_build(&names.pipeline_name, &names.job_name, &names.build_name)
            .await
            .map_err(|e| upstream_failure(FetchStep::GetBuild, e))?
            .ok_or_else(|| {
                tracing::debug!("Build not found");
                BuildPageError::NotFound
            })?;

        // Independent once the build is known; results are checked in a
        // fixed order so the reported failure does not depend on timing.
        let (resources, builds, pipeline) = tokio::join!(
            self.client.build_resources(build.id),
            self.client.job_builds(&names.pipeline_name, &names.job_name),
            self.client.pipeline(&names.pipeline_name),
        );

        let resources = resources
            .map_err(|e| upstream_failure(FetchStep::GetBuildResources, e))?
            .unwrap_or_default();
        let builds = builds
            .map_err(|e| upstream_failure(FetchStep::GetAllBuilds, e))?
            .unwrap_or_default();
        let pipeline = pipeline
            .map_err(|e| upstream_failure(FetchStep::GetPipeline, e))?
            .unwrap_or_default();

        Ok(BuildPage {
            group_states: group::job_states(&pipeline.groups, &job.name),
            job,
            builds,
            build,
            inputs: resources.inputs,
            pipeline_name: self.context.current_pipeline_name(),
        })
    }
}

fn upstream_failure(step: FetchStep, source: ClientError) -> BuildPageError {
    tracing::error!(step = %step, error = %source, "Failed to {}", step);
    BuildPageError::Upstream { step, source }
}
