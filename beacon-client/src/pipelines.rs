//! Pipeline-related API endpoints

use crate::AtcClient;
use crate::error::Result;
use beacon_core::domain::pipeline::Pipeline;

impl AtcClient {
    // =============================================================================
    // Pipelines
    // =============================================================================

    /// Get a pipeline's configuration by name
    ///
    /// # Returns
    /// The pipeline, including its groups, or `None` if it does not exist
    pub async fn get_pipeline(&self, pipeline_name: &str) -> Result<Option<Pipeline>> {
        let url = self.endpoint(&["api", "v1", "pipelines", pipeline_name])?;
        let response = self.get(url).await?;

        self.handle_optional_response(response).await
    }
}
