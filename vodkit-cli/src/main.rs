//! Vodkit CLI
//!
//! Turns a local video file into a streaming-ready VOD by driving a remote
//! media-processing API: upload, multi-bitrate encode, publish, and print the
//! playable URLs.
//!
//! Architecture:
//! - Configuration: account options and workflow settings from environment
//! - Selector: maps the mode argument onto one account binding
//! - Workflow: the ordered sequence of remote calls for one run
//! - Poller: fixed-interval job state observation

mod config;
mod poller;
mod selector;
mod workflow;

#[cfg(test)]
mod testutil;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::selector::{ServiceMode, resolve_binding};
use crate::workflow::{VodOutcome, VodWorkflow};

#[derive(Parser)]
#[command(name = "vodkit")]
#[command(about = "Create a streaming-ready VOD from a local video file", long_about = None)]
struct Cli {
    /// Media service flavor to run against ("ams" or "rms")
    mode: String,

    /// Local video file to upload and encode
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vodkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Mode and configuration are validated before any network call
    let mode = ServiceMode::parse(&cli.mode)?;
    let settings = Settings::from_env();
    settings.workflow.validate()?;
    let binding = resolve_binding(mode, settings.ams, settings.rms)?;

    let scope = binding.scope();
    let ensure_transform = binding.supports_transform_writes();

    info!(
        endpoint = binding.api_endpoint(),
        account = %scope.account_name,
        "connecting to media service"
    );
    let client = binding
        .connect()
        .await
        .context("Failed to sign in to the media service")?;

    let workflow = VodWorkflow::new(Arc::new(client), settings.workflow);
    match workflow.run(&scope, ensure_transform, &cli.input).await? {
        VodOutcome::Published { locator_name, urls } => {
            info!(locator = %locator_name, url_count = urls.len(), "workflow complete");
        }
        VodOutcome::JobFailed { job_name, .. } => {
            // Reported by the workflow already; a failed encode is an outcome,
            // not a process error.
            info!(job = %job_name, "workflow ended with a failed encoding job");
        }
    }

    Ok(())
}
