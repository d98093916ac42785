//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
