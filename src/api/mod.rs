//! HTTP layer translating requests into store operations.
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
