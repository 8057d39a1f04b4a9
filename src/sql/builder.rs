//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and DDL from an entity definition.

use crate::model::EntityDef;
use crate::sql::PgBindValue;

/// Quote identifier for PostgreSQL (safe: only from entity definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Primary key followed by every writable column, in definition order.
fn select_column_list(entity: &EntityDef) -> String {
    std::iter::once(entity.primary_key)
        .chain(entity.columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ORDER BY pk.
pub fn select_list(entity: &EntityDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(entity),
        quoted(entity.table),
        quoted(entity.primary_key)
    );
    q
}

/// SELECT by primary key. The id is the sole param.
pub fn select_by_id(entity: &EntityDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(entity),
        quoted(entity.table),
        quoted(entity.primary_key),
        n
    );
    q
}

/// Row lock taken before an update or delete, so the existence check and the write cannot interleave with another writer.
pub fn lock_by_id(entity: &EntityDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {pk} FROM {} WHERE {pk} = ${} FOR UPDATE",
        quoted(entity.table),
        n,
        pk = quoted(entity.primary_key)
    );
    q
}

/// INSERT every writable column; the store assigns the pk.
pub fn insert(entity: &EntityDef, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(entity.columns.len());
    let mut placeholders = Vec::with_capacity(entity.columns.len());
    for (c, v) in entity.columns.iter().zip(values) {
        let n = q.push_param(v);
        cols.push(quoted(c.name));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(entity.table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(entity)
    );
    q
}

/// UPDATE by id, replacing every writable column.
pub fn update(entity: &EntityDef, id: i32, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(entity.columns.len());
    for (c, v) in entity.columns.iter().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", quoted(c.name), n));
    }
    let id_param = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(entity.table),
        sets.join(", "),
        quoted(entity.primary_key),
        id_param,
        select_column_list(entity)
    );
    q
}

/// DELETE by id.
pub fn delete(entity: &EntityDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(entity.table),
        quoted(entity.primary_key),
        n
    );
    q
}

/// CREATE TABLE IF NOT EXISTS with a SERIAL pk and NOT NULL writable columns.
pub fn create_table(entity: &EntityDef) -> String {
    let mut defs = vec![format!("{} SERIAL PRIMARY KEY", quoted(entity.primary_key))];
    for c in entity.columns {
        defs.push(format!("{} {} NOT NULL", quoted(c.name), c.sql_type.ddl()));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(entity.table),
        defs.join(",\n  ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CoursePayload, Resource, COURSE_ENTITY, USER_ENTITY};

    fn algoritmos() -> Vec<PgBindValue> {
        Course::values(&CoursePayload {
            title: "Algoritmos".into(),
            lesson_count: 10,
            hours: 40,
        })
    }

    #[test]
    fn list_selects_all_columns() {
        let q = select_list(&COURSE_ENTITY);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "titulo", "aulas", "horas" FROM "cursos" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_by_id_binds_id() {
        let q = select_by_id(&USER_ENTITY, 7);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "nome", "email", "senha" FROM "usuarios" WHERE "id" = $1"#
        );
        assert_eq!(q.params, vec![PgBindValue::Int(7)]);
    }

    #[test]
    fn insert_omits_pk_and_returns_row() {
        let q = insert(&COURSE_ENTITY, algoritmos());
        assert_eq!(
            q.sql,
            r#"INSERT INTO "cursos" ("titulo", "aulas", "horas") VALUES ($1, $2, $3) RETURNING "id", "titulo", "aulas", "horas""#
        );
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn update_sets_every_column_and_binds_id_last() {
        let q = update(&COURSE_ENTITY, 3, algoritmos());
        assert_eq!(
            q.sql,
            r#"UPDATE "cursos" SET "titulo" = $1, "aulas" = $2, "horas" = $3 WHERE "id" = $4 RETURNING "id", "titulo", "aulas", "horas""#
        );
        assert_eq!(q.params.last(), Some(&PgBindValue::Int(3)));
    }

    #[test]
    fn lock_and_delete_target_one_row() {
        assert_eq!(
            lock_by_id(&COURSE_ENTITY, 1).sql,
            r#"SELECT "id" FROM "cursos" WHERE "id" = $1 FOR UPDATE"#
        );
        assert_eq!(delete(&COURSE_ENTITY, 1).sql, r#"DELETE FROM "cursos" WHERE "id" = $1"#);
    }

    #[test]
    fn ddl_uses_column_limits() {
        let ddl = create_table(&USER_ENTITY);
        assert!(ddl.starts_with(r#"CREATE TABLE IF NOT EXISTS "usuarios""#));
        assert!(ddl.contains(r#""id" SERIAL PRIMARY KEY"#));
        assert!(ddl.contains(r#""senha" VARCHAR(8) NOT NULL"#));
    }

    #[test]
    fn identifiers_escape_quotes() {
        assert_eq!(quoted(r#"a"b"#), r#""a""b""#);
    }
}
