//! Application state - shared across all handlers.

use std::sync::Arc;

use thiserror::Error;

use formula_core::ports::FormulaRepository;
use formula_infra::DatabaseConfig;

#[cfg(feature = "postgres")]
use formula_infra::{DatabaseConnections, PostgresFormulaRepository};

#[cfg(not(feature = "postgres"))]
use formula_infra::InMemoryFormulaRepository;

/// Failure while building the application state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub formulas: Arc<dyn FormulaRepository>,
    /// The process-wide pool; `None` when a repository was injected directly.
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state: connect the pool, create the schema
    /// and wire the repository onto it.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, StartupError> {
        #[cfg(feature = "postgres")]
        let state = {
            let connections = DatabaseConnections::init(db_config)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            let db = Arc::new(connections);
            Self {
                formulas: Arc::new(PostgresFormulaRepository::new(db.main.clone())),
                db: Some(db),
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            tracing::info!(
                url = %db_config.redacted_url(),
                "Running without postgres feature - using in-memory repository"
            );
            Self::with_repository(Arc::new(InMemoryFormulaRepository::new()))
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State around an already built repository, without a pool.
    pub fn with_repository(formulas: Arc<dyn FormulaRepository>) -> Self {
        Self {
            formulas,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Database reachability for the health endpoint.
    pub async fn database_status(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            return match db.ping().await {
                Ok(()) => "up",
                Err(e) => {
                    tracing::warn!("Database ping failed: {}", e);
                    "down"
                }
            };
        }

        "disabled"
    }

    /// Release the pool. Call once, after the HTTP server has stopped.
    pub async fn shutdown(&self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connections: {}", e);
            }
        }
    }
}
