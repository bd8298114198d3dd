use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait, PrimaryKeyTrait};

use formula_core::error::RepoError;
use formula_core::ports::BaseRepository;

use super::session::{Session, map_db_err};

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Clone + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let session = Session::begin(&self.db).await?;
        let result = E::find_by_id(id)
            .one(session.conn())
            .await
            .map_err(map_db_err)?;
        session.commit().await?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let session = Session::begin(&self.db).await?;
        let result = E::delete_by_id(id)
            .exec(session.conn())
            .await
            .map_err(map_db_err)?;

        // Nothing matched: the session is dropped and rolled back.
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        session.commit().await?;
        Ok(())
    }
}
