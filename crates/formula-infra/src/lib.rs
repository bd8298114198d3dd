//! # Formula Infrastructure
//!
//! Concrete implementations of the ports defined in `formula-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryFormulaRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresFormulaRepository};
