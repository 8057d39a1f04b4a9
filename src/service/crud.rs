//! CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::Resource;
use crate::service::Repository;
use crate::sql::{delete, insert, lock_by_id, select_by_id, select_list, update, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

/// Postgres-backed repository. Each call checks a connection out of the pool and returns it on drop.
#[derive(Clone)]
pub struct CrudService {
    pool: PgPool,
}

impl CrudService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn bind_all<R: Resource>(q: &QueryBuf) -> QueryAs<'_, Postgres, R, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, R>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

#[async_trait]
impl<R: Resource> Repository<R> for CrudService {
    async fn create(&self, payload: &R::Payload) -> Result<R, AppError> {
        let q = insert(R::ENTITY, R::values(payload));
        let row = bind_all::<R>(&q).fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<R>, AppError> {
        let q = select_list(R::ENTITY);
        let rows = bind_all::<R>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn read(&self, id: i32) -> Result<Option<R>, AppError> {
        let q = select_by_id(R::ENTITY, id);
        let row = bind_all::<R>(&q).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Lock, then replace every column, in one transaction. Dropping `tx` without commit rolls back.
    async fn update(&self, id: i32, payload: &R::Payload) -> Result<Option<R>, AppError> {
        let mut tx = self.pool.begin().await?;
        if !lock_row(&mut tx, R::ENTITY, id).await? {
            return Ok(None);
        }
        let q = update(R::ENTITY, id, R::values(payload));
        let row = bind_all::<R>(&q).fetch_one(&mut *tx).await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        if !lock_row(&mut tx, R::ENTITY, id).await? {
            return Ok(false);
        }
        let q = delete(R::ENTITY, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(true)
    }
}

async fn lock_row(
    tx: &mut sqlx::PgConnection,
    entity: &crate::model::EntityDef,
    id: i32,
) -> Result<bool, AppError> {
    let q = lock_by_id(entity, id);
    tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
    let row = sqlx::query(&q.sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    Ok(row.is_some())
}
