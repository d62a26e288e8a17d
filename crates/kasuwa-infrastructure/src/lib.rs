//! # Kasuwa Infrastructure
//!
//! Storage adapters: PostgreSQL repositories and the in-memory store
//! used for local development and tests.

pub mod database;

pub use database::{create_pool, run_migrations, MemoryStore};
pub use database::postgres::{
    PgBuildingRepository, PgMarketRepository, PgRentPaymentRepository, PgShopRepository,
    PgStallRepository, PgTenantRepository,
};
