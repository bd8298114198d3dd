//! Scoped database sessions - one transaction per unit of work.

use sea_orm::{DatabaseTransaction, DbConn, DbErr, TransactionTrait};

use formula_core::RepoError;

/// A transactional unit of work.
///
/// Dropping a session without calling [`Session::commit`] rolls the
/// transaction back, so every early return releases it.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub async fn begin(db: &DbConn) -> Result<Self, RepoError> {
        let txn = db.begin().await.map_err(map_db_err)?;
        Ok(Self { txn })
    }

    /// Connection to run statements on inside this session.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), RepoError> {
        self.txn.commit().await.map_err(map_db_err)
    }
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
