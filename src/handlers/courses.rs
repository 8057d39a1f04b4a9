//! `/cursos` handlers.

use super::resource;
use crate::error::{AppError, ErrorBody};
use crate::model::{Course, CoursePayload};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

#[utoipa::path(
    post,
    path = "/cursos/",
    tag = "cursos",
    summary = "Cria um novo curso.",
    description = "Envia um novo curso para cadastrar.",
    request_body = CoursePayload,
    responses(
        (status = 201, description = "Curso criado com sucesso.", body = Course),
        (status = 422, description = "Corpo inválido.", body = ErrorBody)
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    body: Result<Json<CoursePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    resource::create(state.courses.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/cursos/",
    tag = "cursos",
    summary = "Retorna todos os cursos.",
    description = "Retorna todos os cursos ou uma lista vazia.",
    responses(
        (status = 200, description = "Cursos encontrados com sucesso.", body = [Course])
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    resource::list(state.courses.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    summary = "Retorna o curso informado.",
    description = "Retorna o curso informado ou detalhamento de não encontrado.",
    params(("curso_id" = i32, Path, description = "Id do curso")),
    responses(
        (status = 200, description = "Curso encontrado com sucesso.", body = Course),
        (status = 404, description = "Curso não encontrado.", body = ErrorBody)
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Course>, AppError> {
    resource::read(state.courses.as_ref(), path).await
}

#[utoipa::path(
    put,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    summary = "Altera o curso informado.",
    description = "Retorna os dados do curso informado para alteração ou curso não encontrado.",
    params(("curso_id" = i32, Path, description = "Id do curso")),
    request_body = CoursePayload,
    responses(
        (status = 202, description = "Curso alterado com sucesso.", body = Course),
        (status = 404, description = "Curso não encontrado.", body = ErrorBody),
        (status = 422, description = "Corpo inválido.", body = ErrorBody)
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<CoursePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    resource::update(state.courses.as_ref(), path, body).await
}

#[utoipa::path(
    delete,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    summary = "Deleta o curso informado.",
    description = "Envia um curso para ser deletado.",
    params(("curso_id" = i32, Path, description = "Id do curso")),
    responses(
        (status = 204, description = "Curso deletado com sucesso."),
        (status = 404, description = "Curso não encontrado.", body = ErrorBody)
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    resource::delete(state.courses.as_ref(), path).await
}
