use super::{lenient_i32, ColumnDef, EntityDef, Resource, SqlType};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const COURSE_ENTITY: EntityDef = EntityDef {
    table: "cursos",
    path_segment: "cursos",
    primary_key: "id",
    columns: &[
        ColumnDef { name: "titulo", sql_type: SqlType::Varchar(100) },
        ColumnDef { name: "aulas", sql_type: SqlType::Integer },
        ColumnDef { name: "horas", sql_type: SqlType::Integer },
    ],
    not_found: "Curso não encontrado.",
};

/// A stored course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Course {
    pub id: i32,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[serde(rename = "aulas")]
    #[sqlx(rename = "aulas")]
    pub lesson_count: i32,
    #[serde(rename = "horas")]
    #[sqlx(rename = "horas")]
    pub hours: i32,
}

/// Fields accepted when creating or replacing a course. A client-sent `id` is ignored.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CoursePayload {
    #[serde(rename = "titulo")]
    #[schema(max_length = 100)]
    pub title: String,
    #[serde(rename = "aulas", deserialize_with = "lenient_i32")]
    pub lesson_count: i32,
    #[serde(rename = "horas", deserialize_with = "lenient_i32")]
    pub hours: i32,
}

impl Resource for Course {
    type Payload = CoursePayload;

    const ENTITY: &'static EntityDef = &COURSE_ENTITY;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(payload: &CoursePayload) -> Vec<PgBindValue> {
        vec![
            payload.title.as_str().into(),
            payload.lesson_count.into(),
            payload.hours.into(),
        ]
    }

    fn from_payload(id: i32, payload: &CoursePayload) -> Self {
        Course {
            id,
            title: payload.title.clone(),
            lesson_count: payload.lesson_count,
            hours: payload.hours,
        }
    }
}
