//! Resource routes: `/{segment}/` for the collection, `/{segment}/:id` for one item.

use crate::handlers::{courses, users};
use crate::model::{COURSE_ENTITY, USER_ENTITY};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes(state: AppState) -> Router {
    let collection = get(courses::list_courses).post(courses::create_course);
    let item = get(courses::get_course)
        .put(courses::update_course)
        .delete(courses::delete_course);
    let segment = COURSE_ENTITY.path_segment;
    Router::new()
        .route(&format!("/{}/", segment), collection.clone())
        .route(&format!("/{}", segment), collection)
        .route(&format!("/{}/:curso_id", segment), item)
        .with_state(state)
}

pub fn user_routes(state: AppState) -> Router {
    let collection = get(users::list_users).post(users::create_user);
    let item = get(users::get_user)
        .put(users::update_user)
        .delete(users::delete_user);
    let segment = USER_ENTITY.path_segment;
    Router::new()
        .route(&format!("/{}/", segment), collection.clone())
        .route(&format!("/{}", segment), collection)
        .route(&format!("/{}/:usuario_id", segment), item)
        .with_state(state)
}
