//! Infrastructure layer implementing the storage contract of the domain layer.
//!
//! - [`persistence`] - In-memory and PostgreSQL stores

pub mod persistence;
