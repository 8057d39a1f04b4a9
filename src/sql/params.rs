//! Values that the SQL builder binds as query parameters.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A column value bound to a PostgreSQL query. Reports its own type so INTEGER and VARCHAR parameters infer correctly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PgBindValue {
    Int(i32),
    Text(String),
}

impl PgBindValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PgBindValue::Text(s) => Some(s.as_str()),
            PgBindValue::Int(_) => None,
        }
    }
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::Int(n)
    }
}

impl From<&str> for PgBindValue {
    fn from(s: &str) -> Self {
        PgBindValue::Text(s.to_string())
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)
            }
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Int(_) => <i32 as sqlx::Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as sqlx::Type<Postgres>>::type_info(),
        })
    }
}

impl sqlx::Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
