//! Create entity tables at startup. Idempotent: every statement is CREATE TABLE IF NOT EXISTS.

use crate::error::AppError;
use crate::model::EntityDef;
use crate::sql::create_table;
use sqlx::PgPool;

/// Create one table per registered entity, in registry order.
pub async fn apply_migrations(pool: &PgPool, entities: &[&EntityDef]) -> Result<(), AppError> {
    for entity in entities {
        let ddl = create_table(entity);
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
        tracing::info!(table = entity.table, "table ready");
    }
    Ok(())
}
