//! Domain types
//!
//! Wire-shape models of the remote media resources. Every resource follows
//! the API's `name` + camelCase `properties` envelope, with polymorphic
//! payloads tagged by `@odata.type`.

pub mod asset;
pub mod job;
pub mod streaming;
pub mod transform;
