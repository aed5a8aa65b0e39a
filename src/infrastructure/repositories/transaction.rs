// src/infrastructure/repositories/transaction.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use sqlx::{PgPool, Postgres, Transaction};
use std::marker::PhantomData;

/// Write transaction scoped to one record kind. sqlx rolls back on drop.
pub struct PgRecordTransaction<T> {
    pub(super) tx: Transaction<'static, Postgres>,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgRecordTransaction<T> {
    pub(super) async fn begin(pool: &PgPool) -> DomainResult<Self> {
        let tx = pool.begin().await.map_err(map_sqlx)?;
        Ok(Self {
            tx,
            _record: PhantomData,
        })
    }

    pub(super) async fn finish(self) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}
