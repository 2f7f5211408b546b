//! Transform API endpoints

use tracing::debug;

use crate::error::Result;
use crate::{MediaClient, MediaScope};
use vodkit_core::domain::transform::{Transform, TransformProperties};
use vodkit_core::dto::transform::UpsertTransformRequest;

impl MediaClient {
    /// Create or update a named encoding transform
    ///
    /// Transforms persist across runs; upserting the same definition under an
    /// existing name is a no-op on the service side.
    ///
    /// # Arguments
    /// * `scope` - Resource group and account
    /// * `transform_name` - Name of the transform to upsert
    /// * `properties` - The encoding profile to store under that name
    ///
    /// # Returns
    /// The stored transform
    pub async fn upsert_transform(
        &self,
        scope: &MediaScope,
        transform_name: &str,
        properties: TransformProperties,
    ) -> Result<Transform> {
        let url = self.account_url(scope, &format!("transforms/{}", transform_name));
        debug!(transform_name, "upserting transform");

        let request = UpsertTransformRequest { properties };
        let response = self
            .authorize(self.http().put(&url))
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
