//! CLI configuration
//!
//! Account options for both service flavors are loaded from the environment;
//! each set is optional as a whole, and only the set matching the selected
//! mode has to be present. Workflow settings carry the fixed names and
//! intervals so nothing is hard-coded in the driver or poller.

use std::time::Duration;

use vodkit_client::{AadOptions, RmsOptions};

/// Everything the CLI needs for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory-authenticated account, from VODKIT_AMS_*
    pub ams: Option<AadOptions>,
    /// API-key account, from VODKIT_RMS_*
    pub rms: Option<RmsOptions>,
    pub workflow: WorkflowSettings,
}

impl Settings {
    /// Loads settings from environment variables
    ///
    /// Expected environment variables:
    /// - VODKIT_AMS_API_ENDPOINT, VODKIT_AMS_SUBSCRIPTION_ID,
    ///   VODKIT_AMS_RESOURCE_GROUP, VODKIT_AMS_ACCOUNT_NAME,
    ///   VODKIT_AMS_TENANT_ID, VODKIT_AMS_CLIENT_ID, VODKIT_AMS_CLIENT_SECRET
    /// - VODKIT_RMS_API_ENDPOINT, VODKIT_RMS_SUBSCRIPTION_ID,
    ///   VODKIT_RMS_RESOURCE_GROUP, VODKIT_RMS_ACCOUNT_NAME,
    ///   VODKIT_RMS_API_KEY
    /// - VODKIT_TRANSFORM_NAME (optional, default: "Default")
    /// - VODKIT_STREAMING_ENDPOINT (optional, default: "default")
    /// - VODKIT_POLL_INTERVAL (optional, seconds, default: 30)
    pub fn from_env() -> Self {
        Self {
            ams: load_ams(),
            rms: load_rms(),
            workflow: WorkflowSettings::from_env(),
        }
    }
}

/// Fixed names and intervals used by the workflow driver and poller
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    /// Encoding transform applied to every job
    pub transform_name: String,

    /// Streaming endpoint that will serve the locator paths
    pub streaming_endpoint_name: String,

    /// Predefined policy applied to new streaming locators
    pub streaming_policy_name: String,

    /// How often to re-observe job state while it is non-terminal
    pub poll_interval: Duration,

    /// Lifetime of the upload SAS credential
    pub upload_ttl: Duration,
}

impl WorkflowSettings {
    /// Creates workflow settings from environment variables with defaults
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Some(name) = env_var("VODKIT_TRANSFORM_NAME") {
            settings.transform_name = name;
        }
        if let Some(name) = env_var("VODKIT_STREAMING_ENDPOINT") {
            settings.streaming_endpoint_name = name;
        }
        if let Some(seconds) = env_var("VODKIT_POLL_INTERVAL").and_then(|s| s.parse::<u64>().ok())
        {
            settings.poll_interval = Duration::from_secs(seconds);
        }

        settings
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.transform_name.is_empty() {
            anyhow::bail!("transform name cannot be empty");
        }

        if self.streaming_endpoint_name.is_empty() {
            anyhow::bail!("streaming endpoint name cannot be empty");
        }

        if self.streaming_policy_name.is_empty() {
            anyhow::bail!("streaming policy name cannot be empty");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll interval must be greater than 0");
        }

        if self.upload_ttl.as_secs() == 0 {
            anyhow::bail!("upload TTL must be greater than 0");
        }

        Ok(())
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            transform_name: "Default".to_string(),
            streaming_endpoint_name: "default".to_string(),
            streaming_policy_name: "Predefined_DownloadAndClearStreaming".to_string(),
            poll_interval: Duration::from_secs(30),
            upload_ttl: Duration::from_secs(3600),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn load_ams() -> Option<AadOptions> {
    Some(AadOptions {
        api_endpoint: env_var("VODKIT_AMS_API_ENDPOINT")?,
        subscription_id: env_var("VODKIT_AMS_SUBSCRIPTION_ID")?,
        resource_group: env_var("VODKIT_AMS_RESOURCE_GROUP")?,
        account_name: env_var("VODKIT_AMS_ACCOUNT_NAME")?,
        tenant_id: env_var("VODKIT_AMS_TENANT_ID")?,
        client_id: env_var("VODKIT_AMS_CLIENT_ID")?,
        client_secret: env_var("VODKIT_AMS_CLIENT_SECRET")?,
    })
}

fn load_rms() -> Option<RmsOptions> {
    Some(RmsOptions {
        api_endpoint: env_var("VODKIT_RMS_API_ENDPOINT")?,
        subscription_id: env_var("VODKIT_RMS_SUBSCRIPTION_ID")?,
        resource_group: env_var("VODKIT_RMS_RESOURCE_GROUP")?,
        account_name: env_var("VODKIT_RMS_ACCOUNT_NAME")?,
        api_key: env_var("VODKIT_RMS_API_KEY")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workflow_settings() {
        let settings = WorkflowSettings::default();
        assert_eq!(settings.transform_name, "Default");
        assert_eq!(settings.streaming_endpoint_name, "default");
        assert_eq!(settings.poll_interval, Duration::from_secs(30));
        assert_eq!(settings.upload_ttl, Duration::from_secs(3600));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_workflow_settings_validation() {
        let mut settings = WorkflowSettings::default();
        assert!(settings.validate().is_ok());

        settings.transform_name = String::new();
        assert!(settings.validate().is_err());

        settings.transform_name = "Default".to_string();
        settings.poll_interval = Duration::from_secs(0);
        assert!(settings.validate().is_err());
    }
}
