//! Request validation from column definitions.

use crate::error::AppError;
use crate::model::{ColumnDef, EntityDef, SqlType};
use crate::sql::PgBindValue;

pub struct RequestValidator;

impl RequestValidator {
    /// Check payload values (in column order) against the entity's column limits.
    pub fn validate(entity: &EntityDef, values: &[PgBindValue]) -> Result<(), AppError> {
        for (col, v) in entity.columns.iter().zip(values) {
            validate_field(col, v)?;
        }
        Ok(())
    }
}

fn validate_field(col: &ColumnDef, v: &PgBindValue) -> Result<(), AppError> {
    if let (SqlType::Varchar(max), Some(s)) = (col.sql_type, v.as_text()) {
        if s.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col.name, max
            )));
        }
    }
    Ok(())
}
