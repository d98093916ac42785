//! Store implementations.
//!
//! - [`MemoryStore`] - In-process maps behind a single lock
//! - [`PgStore`] - PostgreSQL tables with transactional writes

pub mod memory_store;
pub mod pg_store;

pub use memory_store::MemoryStore;
pub use pg_store::PgStore;
