//! Blob upload channel
//!
//! Source media is uploaded straight into an asset's backing container using
//! a short-lived container SAS URL obtained from the media API. The upload is
//! a single PUT of the whole file under its base file name; there is no
//! chunking or resume.

use std::path::Path;

use tracing::debug;

use crate::MediaClient;
use crate::error::{ClientError, Result};

impl MediaClient {
    /// Upload a local file into a container addressed by a SAS URL
    ///
    /// The blob takes the file's base name. Blocks until the upload completes
    /// or fails.
    ///
    /// # Arguments
    /// * `container_sas_url` - Write-capable container SAS URL
    /// * `path` - Local file to upload
    pub async fn upload_file(&self, container_sas_url: &str, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::InvalidUploadSource(path.display().to_string()))?;

        let blob_url = blob_url(container_sas_url, file_name)?;
        debug!(file_name, "uploading blob");

        let bytes = tokio::fs::read(path).await?;

        // The SAS query string is the only credential; no account auth here.
        let response = self
            .http()
            .put(&blob_url)
            .header("x-ms-blob-type", "BlockBlob")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

/// Derive a blob URL from a container SAS URL by inserting the blob name
/// before the query string
fn blob_url(container_sas_url: &str, blob_name: &str) -> Result<String> {
    let (base, query) = container_sas_url
        .split_once('?')
        .ok_or_else(|| ClientError::InvalidSasUrl(container_sas_url.to_string()))?;

    Ok(format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        blob_name,
        query
    ))
}
