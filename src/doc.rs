//! OpenAPI document for the resource routes.
//!
//! Paths are relative to the API prefix, which is published as the document's
//! only server entry so Swagger UI calls the prefixed routes.

use crate::error::ErrorBody;
use crate::model::{Course, CoursePayload, User, UserPayload};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cursos API",
        version = "v1",
        description = "Uma API para estudo de cursos e usuários."
    ),
    paths(
        crate::handlers::courses::create_course,
        crate::handlers::courses::list_courses,
        crate::handlers::courses::get_course,
        crate::handlers::courses::update_course,
        crate::handlers::courses::delete_course,
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
    ),
    components(schemas(Course, CoursePayload, User, UserPayload, ErrorBody)),
    tags(
        (name = "cursos", description = "Cadastro de cursos"),
        (name = "usuarios", description = "Cadastro de usuários")
    )
)]
pub struct ApiDoc;

/// The document with `api_prefix` as its server URL.
pub fn openapi(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let url = if api_prefix.is_empty() { "/" } else { api_prefix };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_resource_path() {
        let doc = openapi("/api/v1");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/cursos/", "/cursos/{curso_id}", "/usuarios/", "/usuarios/{usuario_id}"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing path {}", expected);
        }
    }

    #[test]
    fn server_is_the_api_prefix() {
        let doc = openapi("/api/v1");
        let servers = doc.servers.expect("servers");
        assert_eq!(servers[0].url, "/api/v1");
    }

    #[test]
    fn registers_wire_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["Course", "CoursePayload", "User", "UserPayload", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
