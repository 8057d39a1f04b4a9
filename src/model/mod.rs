//! Entity definitions: table layout, wire shape, and the registry handed to table creation.

mod course;
mod user;

pub use course::{Course, CoursePayload, COURSE_ENTITY};
pub use user::{User, UserPayload, USER_ENTITY};

use crate::sql::PgBindValue;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Column type as declared in DDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Varchar(usize),
}

impl SqlType {
    pub fn ddl(&self) -> String {
        match self {
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Varchar(n) => format!("VARCHAR({})", n),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
}

/// Static description of one persisted entity. Identifiers used in SQL come only from here.
#[derive(Debug)]
pub struct EntityDef {
    pub table: &'static str,
    pub path_segment: &'static str,
    /// SERIAL primary key column, assigned by the store.
    pub primary_key: &'static str,
    /// Writable columns, in the order payload values are produced.
    pub columns: &'static [ColumnDef],
    pub not_found: &'static str,
}

static REGISTRY: [&EntityDef; 2] = [&COURSE_ENTITY, &USER_ENTITY];

/// Every entity the service persists. Passed to `apply_migrations` at startup.
pub fn registry() -> &'static [&'static EntityDef] {
    &REGISTRY
}

/// A record type backed by an [`EntityDef`], with its create/update payload.
pub trait Resource:
    Serialize + for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static
{
    type Payload: DeserializeOwned + Send + Sync + 'static;

    const ENTITY: &'static EntityDef;

    fn id(&self) -> i32;

    /// Payload values in `ENTITY.columns` order.
    fn values(payload: &Self::Payload) -> Vec<PgBindValue>;

    /// Builds the record a store holds after writing `payload` under `id`.
    fn from_payload(id: i32, payload: &Self::Payload) -> Self;
}

/// Accepts a JSON integer, an integral float, a boolean (0 or 1), or a numeric
/// string such as `"10"` or `"10.0"`, within `i32` range.
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    let n = match &v {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::Bool(b) => Some(i64::from(*b)),
        serde_json::Value::String(s) => parse_integral(s.trim()),
        _ => None,
    };
    n.and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected a 32-bit integer, found {}", v)))
}

/// `"10"`, `"-3"`, or a decimal whose fraction is all zeros (`"10.0"`).
fn parse_integral(s: &str) -> Option<i64> {
    match s.split_once('.') {
        None => s.parse().ok(),
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => {
            whole.parse().ok()
        }
        Some(_) => None,
    }
}
