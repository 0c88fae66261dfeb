//! Job-related API endpoints

use crate::AtcClient;
use crate::error::Result;
use beacon_core::domain::build::Build;
use beacon_core::domain::job::Job;

impl AtcClient {
    // =============================================================================
    // Jobs
    // =============================================================================

    /// Get a job by pipeline and job name
    ///
    /// # Returns
    /// The job, or `None` if the pipeline or job does not exist
    pub async fn get_job(&self, pipeline_name: &str, job_name: &str) -> Result<Option<Job>> {
        let url = self.endpoint(&["api", "v1", "pipelines", pipeline_name, "jobs", job_name])?;
        let response = self.get(url).await?;

        self.handle_optional_response(response).await
    }

    /// List the builds of a job
    ///
    /// # Returns
    /// The job's builds in the order the API returns them (newest first),
    /// or `None` if the job does not exist
    pub async fn list_job_builds(
        &self,
        pipeline_name: &str,
        job_name: &str,
    ) -> Result<Option<Vec<Build>>> {
        let url = self.endpoint(&[
            "api",
            "v1",
            "pipelines",
            pipeline_name,
            "jobs",
            job_name,
            "builds",
        ])?;
        let response = self.get(url).await?;

        self.handle_optional_response(response).await
    }
}
