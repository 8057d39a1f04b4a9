//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Carries the entity's fixed, client-facing message.
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    /// Body could not be read at all (too large, client went away); keeps axum's status.
    #[error("{1}")]
    Rejection(StatusCode, String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation(rejection.body_text())
            }
            other => AppError::Rejection(other.status(), other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub detail: String,
    /// Stable machine-readable code.
    pub code: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejection(status, _) => *status,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Rejection(status, _) if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "payload_too_large"
            }
            AppError::Rejection(..) => "bad_request",
            AppError::Db(_) => "database_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::Config(_) | AppError::Db(_) => {
                tracing::error!(error = %self, "request failed");
                "Internal Server Error".to_string()
            }
            AppError::NotFound(_) | AppError::Validation(_) | AppError::Rejection(..) => {
                self.to_string()
            }
        };
        let body = ErrorBody {
            detail,
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
