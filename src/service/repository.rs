//! Store seam shared by every resource router.

use crate::error::AppError;
use crate::model::Resource;
use async_trait::async_trait;

/// Persistence for one resource type.
///
/// `update` and `delete` return `None`/`false` when no row has the id. The
/// existence check and the write happen atomically.
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn create(&self, payload: &R::Payload) -> Result<R, AppError>;

    async fn list(&self) -> Result<Vec<R>, AppError>;

    async fn read(&self, id: i32) -> Result<Option<R>, AppError>;

    async fn update(&self, id: i32, payload: &R::Payload) -> Result<Option<R>, AppError>;

    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
