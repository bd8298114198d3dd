//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use formula_core::domain::{Formula, FormulaChanges, NewFormula};
use formula_core::error::RepoError;
use formula_core::ports::FormulaRepository;

use super::entity::formula::{self, Entity as FormulaEntity};
use super::postgres_base::PostgresBaseRepository;
use super::session::{Session, map_db_err};

/// PostgreSQL formula repository.
pub type PostgresFormulaRepository = PostgresBaseRepository<FormulaEntity>;

#[async_trait]
impl FormulaRepository for PostgresFormulaRepository {
    async fn create(&self, input: NewFormula) -> Result<Formula, RepoError> {
        let session = Session::begin(&self.db).await?;

        let active = formula::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            content: Set(input.content),
            ..Default::default()
        };
        let model = active.insert(session.conn()).await.map_err(map_db_err)?;

        session.commit().await?;
        tracing::debug!(formula_id = %model.id, "Formula created");

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<Formula>, RepoError> {
        let session = Session::begin(&self.db).await?;
        let result = FormulaEntity::find()
            .order_by_desc(formula::Column::UpdatedAt)
            .all(session.conn())
            .await
            .map_err(map_db_err)?;
        session.commit().await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, changes: FormulaChanges) -> Result<Formula, RepoError> {
        let session = Session::begin(&self.db).await?;

        let existing = FormulaEntity::find_by_id(id)
            .one(session.conn())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.clone().into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let model = if active.is_changed() {
            // The row can vanish between the lookup and the write.
            active.update(session.conn()).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => map_db_err(other),
            })?
        } else {
            existing
        };

        session.commit().await?;
        tracing::debug!(formula_id = %id, "Formula updated");

        Ok(model.into())
    }
}
