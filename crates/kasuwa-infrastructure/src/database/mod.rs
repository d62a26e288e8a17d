//! Database module (PostgreSQL adapters and the in-memory store)

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::{create_pool, run_migrations};
pub use memory::MemoryStore;
