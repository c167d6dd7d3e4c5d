//! # helmet-database
//!
//! Data access for the helmet registry: the [`HelmetStore`] trait, its
//! PostgreSQL implementation, an in-memory implementation for tests and
//! local runs, plus connection pool and migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::InMemoryHelmetStore;
pub use repositories::PgHelmetRepository;
pub use store::HelmetStore;
