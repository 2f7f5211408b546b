//! Vodkit Core
//!
//! Core types for the vodkit VOD workflow tool.
//!
//! This crate contains:
//! - Domain types: wire-shape models of the remote media resources
//!   (Asset, Transform, Job, Streaming Locator/Endpoint)
//! - DTOs: request/response bodies exchanged with the media API
//! - The fixed standard encoding profile used for every VOD job

pub mod domain;
pub mod dto;
pub mod profile;
