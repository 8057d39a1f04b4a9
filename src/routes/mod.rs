mod common;
mod entity;

pub use common::common_routes;
pub use entity::{course_routes, user_routes};
