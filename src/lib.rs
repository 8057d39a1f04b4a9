//! Cursos API: CRUD REST backend for courses and users on PostgreSQL.

pub mod app;
pub mod config;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{registry, Course, CoursePayload, Resource, User, UserPayload};
pub use service::{CrudService, MemoryRepository, Repository};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
