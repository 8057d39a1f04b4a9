//! HTTP handlers for the course and user resources.

pub mod courses;
pub mod resource;
pub mod users;
