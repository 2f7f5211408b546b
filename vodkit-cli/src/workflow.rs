//! VOD workflow driver
//!
//! Runs the ordered sequence of remote operations that turns one local video
//! file into a published, streamable VOD: create input asset, upload, create
//! output asset, ensure the transform, submit the job, poll to completion,
//! publish a streaming locator and resolve the playable URLs.
//!
//! The first failed call aborts the whole run; there is no retry and no
//! rollback of already-created resources.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use colored::*;
use uuid::Uuid;

use vodkit_client::{MediaOps, MediaScope};
use vodkit_core::domain::job::JobState;
use vodkit_core::dto::asset::AssetContainerPermission;
use vodkit_core::dto::job::CreateJobRequest;
use vodkit_core::profile;

use crate::config::WorkflowSettings;
use crate::poller::JobPoller;

/// How one workflow run ended
///
/// A failed encoding job is a reported outcome, not an error; remote call
/// failures surface as `Err` instead.
#[derive(Debug)]
pub enum VodOutcome {
    /// Job finished and the locator was published
    Published {
        locator_name: String,
        /// Streaming URLs first, then download URLs, in API order
        urls: Vec<String>,
    },
    /// The encoding job reached the Error state
    JobFailed { job_name: String, message: String },
}

/// Orchestrates one VOD creation run against an authenticated client
pub struct VodWorkflow {
    ops: Arc<dyn MediaOps>,
    settings: WorkflowSettings,
}

impl VodWorkflow {
    pub fn new(ops: Arc<dyn MediaOps>, settings: WorkflowSettings) -> Self {
        Self { ops, settings }
    }

    /// Execute the whole workflow for one input file
    ///
    /// # Arguments
    /// * `scope` - Resource group and account to run against
    /// * `ensure_transform` - Whether to upsert the encoding transform first
    ///   (skipped for accounts that do not accept transform writes)
    /// * `input_file` - Local video file to encode
    pub async fn run(
        &self,
        scope: &MediaScope,
        ensure_transform: bool,
        input_file: &Path,
    ) -> Result<VodOutcome> {
        let names = RunNames::generate();

        let input_asset = self
            .ops
            .upsert_asset(scope, &names.input_asset)
            .await
            .context("Failed to create input asset")?;
        println!("Input asset created: {}", input_asset.name.green());

        println!();
        println!("Uploading video to input asset...");
        self.upload_input(scope, &names.input_asset, input_file).await?;
        println!("Video upload completed!");

        let output_asset = self
            .ops
            .upsert_asset(scope, &names.output_asset)
            .await
            .context("Failed to create output asset")?;
        println!();
        println!("Output asset created: {}", output_asset.name.green());

        if ensure_transform {
            self.ops
                .upsert_transform(
                    scope,
                    &self.settings.transform_name,
                    profile::standard_encoding_transform(),
                )
                .await
                .context("Failed to upsert encoding transform")?;
        }

        let job = self
            .ops
            .create_job(
                scope,
                &self.settings.transform_name,
                &names.job,
                CreateJobRequest::asset_to_asset(&names.input_asset, &names.output_asset),
            )
            .await
            .context("Failed to create job")?;
        println!();
        println!("Job created: {}", job.name.green());

        let poller = JobPoller::new(Arc::clone(&self.ops), self.settings.poll_interval);
        let job = poller
            .wait_until_done(scope, &self.settings.transform_name, &names.job)
            .await?;

        if job.properties.state == JobState::Error {
            let message = job
                .first_error_message()
                .unwrap_or("no error detail reported")
                .to_string();
            println!(
                "{}",
                format!("ERROR: Encoding job has failed: {message}").red()
            );
            return Ok(VodOutcome::JobFailed {
                job_name: names.job,
                message,
            });
        }

        println!("Job finished: {}", job.name.green());

        self.ops
            .create_streaming_locator(
                scope,
                &names.locator,
                &names.output_asset,
                &self.settings.streaming_policy_name,
            )
            .await
            .context("Failed to create streaming locator")?;
        println!();
        println!("Streaming locator created: {}", names.locator.as_str().green());

        let endpoint = self
            .ops
            .get_streaming_endpoint(scope, &self.settings.streaming_endpoint_name)
            .await
            .context("Failed to get streaming endpoint")?;

        if !endpoint.is_running() {
            // Fire-and-forget: paths are listed without waiting for the start
            // to propagate, so freshly started endpoints may lag briefly.
            self.ops
                .start_streaming_endpoint(scope, &self.settings.streaming_endpoint_name)
                .await
                .context("Failed to start streaming endpoint")?;
            println!(
                "{}",
                "Streaming endpoint is starting; URLs may take a moment to go live".yellow()
            );
        }

        let paths = self
            .ops
            .list_streaming_paths(scope, &names.locator)
            .await
            .context("Failed to list streaming paths")?;

        let host = &endpoint.properties.host_name;
        let mut urls = Vec::new();

        println!();
        println!("The following URLs are available for adaptive streaming:");
        for streaming_path in &paths.streaming_paths {
            for path in &streaming_path.paths {
                let url = format!("https://{host}{path}");
                println!("{}", url.as_str().cyan());
                urls.push(url);
            }
        }

        println!();
        println!("The following URLs are available for downloads:");
        for path in &paths.download_paths {
            let url = format!("https://{host}{path}");
            println!("{}", url.as_str().cyan());
            urls.push(url);
        }

        Ok(VodOutcome::Published {
            locator_name: names.locator,
            urls,
        })
    }

    /// Obtain a short-lived write SAS for the asset container and upload the
    /// file under its base name
    async fn upload_input(
        &self,
        scope: &MediaScope,
        asset_name: &str,
        input_file: &Path,
    ) -> Result<()> {
        let ttl = chrono::Duration::from_std(self.settings.upload_ttl)
            .context("Upload TTL out of range")?;
        let sas_urls = self
            .ops
            .list_asset_container_sas(
                scope,
                asset_name,
                AssetContainerPermission::ReadWrite,
                Utc::now() + ttl,
            )
            .await
            .context("Failed to obtain container SAS URLs")?;

        let sas_url = sas_urls
            .first()
            .ok_or_else(|| anyhow!("media API returned no container SAS URLs"))?;

        self.ops
            .upload_file(sas_url, input_file)
            .await
            .context("Failed to upload input file")?;

        Ok(())
    }
}

/// Resource names for one run, all sharing one generated suffix
///
/// The shared suffix keeps concurrent runs collision-free and makes the
/// input/output/job/locator of one run trivially correlatable.
#[derive(Debug, Clone)]
struct RunNames {
    input_asset: String,
    output_asset: String,
    job: String,
    locator: String,
}

impl RunNames {
    fn generate() -> Self {
        let mut unique = Uuid::new_v4().to_string();
        unique.truncate(13);
        Self {
            input_asset: format!("input-{unique}"),
            output_asset: format!("output-{unique}"),
            job: format!("job-{unique}"),
            locator: format!("locator-{unique}"),
        }
    }
}
