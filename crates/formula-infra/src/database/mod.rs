//! Database connection management and the SeaORM-backed repository.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;
#[cfg(feature = "postgres")]
mod session;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConnections, ensure_schema};
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresFormulaRepository;
#[cfg(feature = "postgres")]
pub use session::Session;
