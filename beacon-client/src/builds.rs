//! Build-related API endpoints

use crate::AtcClient;
use crate::error::Result;
use beacon_core::domain::build::Build;
use beacon_core::domain::resource::BuildInputsOutputs;

impl AtcClient {
    // =============================================================================
    // Builds
    // =============================================================================

    /// Get a job's build by name
    ///
    /// # Returns
    /// The build, or `None` if the job has no build with that name
    pub async fn get_job_build(
        &self,
        pipeline_name: &str,
        job_name: &str,
        build_name: &str,
    ) -> Result<Option<Build>> {
        let url = self.endpoint(&[
            "api",
            "v1",
            "pipelines",
            pipeline_name,
            "jobs",
            job_name,
            "builds",
            build_name,
        ])?;
        let response = self.get(url).await?;

        self.handle_optional_response(response).await
    }

    /// Get the resource versions a build consumed and produced
    ///
    /// # Arguments
    /// * `build_id` - The numeric build ID (not the build name)
    pub async fn get_build_resources(&self, build_id: i64) -> Result<Option<BuildInputsOutputs>> {
        let id = build_id.to_string();
        let url = self.endpoint(&["api", "v1", "builds", id.as_str(), "resources"])?;
        let response = self.get(url).await?;

        self.handle_optional_response(response).await
    }
}
