//! `/usuarios` handlers.

use super::resource;
use crate::error::{AppError, ErrorBody};
use crate::model::{User, UserPayload};
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
    path = "/usuarios/",
    tag = "usuarios",
    summary = "Cria um novo usuário.",
    description = "Envia um novo usuário para cadastrar.",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Usuário criado com sucesso.", body = User),
        (status = 422, description = "Corpo inválido.", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    resource::create(state.users.as_ref(), body).await
}

#[utoipa::path(
    get,
    path = "/usuarios/",
    tag = "usuarios",
    summary = "Retorna todos os usuários.",
    description = "Retorna todos os usuários ou uma lista vazia.",
    responses(
        (status = 200, description = "Usuários encontrados com sucesso.", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    resource::list(state.users.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/usuarios/{usuario_id}",
    tag = "usuarios",
    summary = "Retorna o usuário informado.",
    description = "Retorna o usuário informado ou detalhamento de não encontrado.",
    params(("usuario_id" = i32, Path, description = "Id do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado com sucesso.", body = User),
        (status = 404, description = "Usuário não encontrado.", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, AppError> {
    resource::read(state.users.as_ref(), path).await
}

#[utoipa::path(
    put,
    path = "/usuarios/{usuario_id}",
    tag = "usuarios",
    summary = "Altera o usuário informado.",
    description = "Retorna os dados do usuário informado para alteração ou usuário não encontrado.",
    params(("usuario_id" = i32, Path, description = "Id do usuário")),
    request_body = UserPayload,
    responses(
        (status = 202, description = "Usuário alterado com sucesso.", body = User),
        (status = 404, description = "Usuário não encontrado.", body = ErrorBody),
        (status = 422, description = "Corpo inválido.", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    resource::update(state.users.as_ref(), path, body).await
}

#[utoipa::path(
    delete,
    path = "/usuarios/{usuario_id}",
    tag = "usuarios",
    summary = "Deleta o usuário informado.",
    description = "Envia um usuário para ser deletado.",
    params(("usuario_id" = i32, Path, description = "Id do usuário")),
    responses(
        (status = 204, description = "Usuário deletado com sucesso."),
        (status = 404, description = "Usuário não encontrado.", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    resource::delete(state.users.as_ref(), path).await
}
