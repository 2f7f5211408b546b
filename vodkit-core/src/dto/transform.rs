//! Transform DTOs

use serde::{Deserialize, Serialize};

use crate::domain::transform::TransformProperties;

/// Body of a transform upsert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertTransformRequest {
    pub properties: TransformProperties,
}
