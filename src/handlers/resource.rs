//! Handler bodies shared by every resource: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::Resource;
use crate::service::{Repository, RequestValidator};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    Json,
};

/// Unwrap an extracted body, turning rejections into 422, then check column limits.
fn accept<R: Resource>(body: Result<Json<R::Payload>, JsonRejection>) -> Result<R::Payload, AppError> {
    let Json(payload) = body?;
    RequestValidator::validate(R::ENTITY, &R::values(&payload))?;
    Ok(payload)
}

fn parse_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = path?;
    Ok(id)
}

pub async fn create<R: Resource>(
    repo: &dyn Repository<R>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let payload = accept::<R>(body)?;
    let row = repo.create(&payload).await?;
    tracing::info!(table = R::ENTITY.table, id = row.id(), "created");
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list<R: Resource>(repo: &dyn Repository<R>) -> Result<Json<Vec<R>>, AppError> {
    Ok(Json(repo.list().await?))
}

pub async fn read<R: Resource>(
    repo: &dyn Repository<R>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<R>, AppError> {
    let id = parse_id(path)?;
    let row = repo
        .read(id)
        .await?
        .ok_or(AppError::NotFound(R::ENTITY.not_found))?;
    Ok(Json(row))
}

pub async fn update<R: Resource>(
    repo: &dyn Repository<R>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let id = parse_id(path)?;
    let payload = accept::<R>(body)?;
    let row = repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::NotFound(R::ENTITY.not_found))?;
    tracing::info!(table = R::ENTITY.table, id, "updated");
    Ok((StatusCode::ACCEPTED, Json(row)))
}

pub async fn delete<R: Resource>(
    repo: &dyn Repository<R>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(path)?;
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(R::ENTITY.not_found));
    }
    tracing::info!(table = R::ENTITY.table, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
