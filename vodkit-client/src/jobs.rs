//! Job API endpoints

use tracing::debug;

use crate::error::Result;
use crate::{MediaClient, MediaScope};
use vodkit_core::domain::job::Job;
use vodkit_core::dto::job::CreateJobRequest;

impl MediaClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a new encoding job under a transform
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `transform_name` - Transform the job runs under
    /// * `job_name` - Name of the job to create
    /// * `request` - Input and output asset references
    ///
    /// # Returns
    /// The created job
    pub async fn create_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
        request: CreateJobRequest,
    ) -> Result<Job> {
        let url = self.account_url(
            scope,
            &format!("transforms/{}/jobs/{}", transform_name, job_name),
        );
        debug!(transform_name, job_name, "creating job");

        let response = self
            .authorize(self.http().put(&url))
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get the current state of a job
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `transform_name` - Transform the job runs under
    /// * `job_name` - Name of the job to query
    ///
    /// # Returns
    /// The job with its current state and per-output progress
    pub async fn get_job(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Job> {
        let url = self.account_url(
            scope,
            &format!("transforms/{}/jobs/{}", transform_name, job_name),
        );
        let response = self.authorize(self.http().get(&url)).send().await?;

        self.handle_response(response).await
    }
}
