//! In-memory repository for tests and local runs without a database.

use crate::error::AppError;
use crate::model::Resource;
use crate::service::Repository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

struct Table<R> {
    next_id: i32,
    rows: BTreeMap<i32, R>,
}

/// One table behind a single mutex; every check-and-act runs under the lock. Ids start at 1.
pub struct MemoryRepository<R> {
    table: Mutex<Table<R>>,
}

impl<R> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<R> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for MemoryRepository<R> {
    async fn create(&self, payload: &R::Payload) -> Result<R, AppError> {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;
        let record = R::from_payload(id, payload);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<R>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn read(&self, id: i32) -> Result<Option<R>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, payload: &R::Payload) -> Result<Option<R>, AppError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            *row = R::from_payload(id, payload);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
