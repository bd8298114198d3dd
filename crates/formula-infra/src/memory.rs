//! In-memory formula repository - used when the server is built without
//! the `postgres` feature, and by the HTTP tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use formula_core::domain::{Formula, FormulaChanges, NewFormula};
use formula_core::error::RepoError;
use formula_core::ports::{BaseRepository, FormulaRepository};

/// In-memory formula store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryFormulaRepository {
    store: RwLock<HashMap<Uuid, Formula>>,
}

impl InMemoryFormulaRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryFormulaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Formula, Uuid> for InMemoryFormulaRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Formula>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl FormulaRepository for InMemoryFormulaRepository {
    async fn create(&self, input: NewFormula) -> Result<Formula, RepoError> {
        let formula = Formula::new(input);
        self.store.write().await.insert(formula.id, formula.clone());
        Ok(formula)
    }

    async fn find_all(&self) -> Result<Vec<Formula>, RepoError> {
        let mut all: Vec<Formula> = self.store.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn update(&self, id: Uuid, changes: FormulaChanges) -> Result<Formula, RepoError> {
        let mut store = self.store.write().await;
        let formula = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        formula.apply(changes);
        Ok(formula.clone())
    }
}
