//! Job poller
//!
//! Re-observes the state of one encoding job at a fixed interval until the
//! remote service reports a terminal state. Purely periodic: no timeout, no
//! backoff, no cancellation hook. A failed status query is not retried here;
//! it propagates and aborts the workflow.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

use vodkit_client::{MediaOps, MediaScope};
use vodkit_core::domain::job::Job;

/// Polls one job until it reaches a terminal state
pub struct JobPoller {
    ops: Arc<dyn MediaOps>,
    interval: Duration,
}

impl JobPoller {
    /// Creates a poller observing through `ops` at a fixed interval
    pub fn new(ops: Arc<dyn MediaOps>, interval: Duration) -> Self {
        Self { ops, interval }
    }

    /// Block until the job reaches Finished, Error or Canceled
    ///
    /// Each observation prints state and best-effort progress (0 when the
    /// service reports none) before any delay. The poller sleeps only between
    /// non-terminal observations and returns the final job record immediately
    /// on the first terminal one.
    pub async fn wait_until_done(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Job> {
        debug!(job_name, interval = ?self.interval, "polling job until terminal");

        loop {
            let job = self
                .ops
                .get_job(scope, transform_name, job_name)
                .await
                .context("Failed to query job state")?;

            let state = job.properties.state;
            let progress = job.progress();
            println!(
                "Job state: {}, progress: {}",
                state.to_string().cyan(),
                progress
            );

            if state.is_terminal() {
                return Ok(job);
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{RecordingOps, job_in_state};
    use vodkit_core::domain::job::JobState;

    fn scope() -> MediaScope {
        MediaScope::new("group", "account")
    }

    #[tokio::test]
    async fn polls_once_per_state_until_terminal() {
        let ops = Arc::new(RecordingOps::new(vec![
            job_in_state(JobState::Queued, Some(0)),
            job_in_state(JobState::Processing, Some(40)),
            job_in_state(JobState::Processing, Some(80)),
            job_in_state(JobState::Finished, Some(100)),
        ]));

        let poller = JobPoller::new(ops.clone(), Duration::ZERO);
        let job = poller
            .wait_until_done(&scope(), "Default", "job-1")
            .await
            .unwrap();

        assert_eq!(job.properties.state, JobState::Finished);
        assert_eq!(ops.count("get_job:"), 4);
    }

    #[tokio::test]
    async fn returns_immediately_on_first_terminal_state() {
        let ops = Arc::new(RecordingOps::new(vec![job_in_state(
            JobState::Canceled,
            None,
        )]));

        let poller = JobPoller::new(ops.clone(), Duration::from_secs(3600));
        let job = poller
            .wait_until_done(&scope(), "Default", "job-1")
            .await
            .unwrap();

        // One query, no further observation; with an hour-long interval this
        // test would hang if a trailing sleep existed.
        assert_eq!(job.properties.state, JobState::Canceled);
        assert_eq!(ops.count("get_job:"), 1);
    }

    #[tokio::test]
    async fn missing_progress_is_read_as_zero() {
        let ops = Arc::new(RecordingOps::new(vec![
            job_in_state(JobState::Queued, None),
            job_in_state(JobState::Error, None),
        ]));

        let poller = JobPoller::new(ops.clone(), Duration::ZERO);
        let job = poller
            .wait_until_done(&scope(), "Default", "job-1")
            .await
            .unwrap();

        assert_eq!(job.progress(), 0);
        assert_eq!(job.properties.state, JobState::Error);
    }
}
