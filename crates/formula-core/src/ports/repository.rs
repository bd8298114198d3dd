use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Formula, FormulaChanges, NewFormula};
use crate::error::RepoError;

/// Generic repository trait for reads and deletes keyed by id.
///
/// Every call is its own unit of work: implementations open a transaction,
/// run the operation and commit before returning.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when
    /// nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Formula repository.
#[async_trait]
pub trait FormulaRepository: BaseRepository<Formula, Uuid> {
    /// Insert a new formula; the store assigns id and timestamps.
    async fn create(&self, input: NewFormula) -> Result<Formula, RepoError>;

    /// Return every stored formula, most recently updated first.
    async fn find_all(&self) -> Result<Vec<Formula>, RepoError>;

    /// Apply a partial update and return the stored row. Fails with
    /// [`RepoError::NotFound`] when the id is unknown.
    async fn update(&self, id: Uuid, changes: FormulaChanges) -> Result<Formula, RepoError>;
}
