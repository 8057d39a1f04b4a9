//! Shared application state for all routes.

use crate::model::{Course, User};
use crate::service::{CrudService, MemoryRepository, Repository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Present when backed by Postgres; used by the readiness probe.
    pub pool: Option<PgPool>,
    pub courses: Arc<dyn Repository<Course>>,
    pub users: Arc<dyn Repository<User>>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        let crud = Arc::new(CrudService::new(pool.clone()));
        Self {
            pool: Some(pool),
            courses: crud.clone(),
            users: crud,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            pool: None,
            courses: Arc::new(MemoryRepository::<Course>::new()),
            users: Arc::new(MemoryRepository::<User>::new()),
        }
    }
}
