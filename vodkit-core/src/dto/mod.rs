//! DTOs exchanged with the media API
//!
//! Request/response bodies that are not themselves named resources.

pub mod asset;
pub mod job;
pub mod streaming;
pub mod transform;
