//! Data access trait
//!
//! The read operations pages need from the CI API. Each lookup distinguishes
//! "the API failed" (`Err`) from "the record does not exist" (`Ok(None)`).

use async_trait::async_trait;
use beacon_core::domain::build::Build;
use beacon_core::domain::job::Job;
use beacon_core::domain::pipeline::Pipeline;
use beacon_core::domain::resource::BuildInputsOutputs;

use crate::AtcClient;
use crate::error::Result;

/// Read access to CI records
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Look up a job by pipeline and job name
    async fn job(&self, pipeline_name: &str, job_name: &str) -> Result<Option<Job>>;

    /// Look up a job's build by name
    async fn job_build(
        &self,
        pipeline_name: &str,
        job_name: &str,
        build_name: &str,
    ) -> Result<Option<Build>>;

    /// Look up the inputs and outputs of a build by its numeric ID
    async fn build_resources(&self, build_id: i64) -> Result<Option<BuildInputsOutputs>>;

    /// List a job's builds
    async fn job_builds(&self, pipeline_name: &str, job_name: &str) -> Result<Option<Vec<Build>>>;

    /// Look up a pipeline's configuration
    async fn pipeline(&self, pipeline_name: &str) -> Result<Option<Pipeline>>;
}

#[async_trait]
impl DataClient for AtcClient {
    async fn job(&self, pipeline_name: &str, job_name: &str) -> Result<Option<Job>> {
        self.get_job(pipeline_name, job_name).await
    }

    async fn job_build(
        &self,
        pipeline_name: &str,
        job_name: &str,
        build_name: &str,
    ) -> Result<Option<Build>> {
        self.get_job_build(pipeline_name, job_name, build_name).await
    }

    async fn build_resources(&self, build_id: i64) -> Result<Option<BuildInputsOutputs>> {
        self.get_build_resources(build_id).await
    }

    async fn job_builds(&self, pipeline_name: &str, job_name: &str) -> Result<Option<Vec<Build>>> {
        self.list_job_builds(pipeline_name, job_name).await
    }

    async fn pipeline(&self, pipeline_name: &str) -> Result<Option<Pipeline>> {
        self.get_pipeline(pipeline_name).await
    }
}
