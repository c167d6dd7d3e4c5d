//! PostgreSQL repository implementations.

pub mod helmet;

pub use helmet::PgHelmetRepository;
