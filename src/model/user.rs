use super::{ColumnDef, EntityDef, Resource, SqlType};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const USER_ENTITY: EntityDef = EntityDef {
    table: "usuarios",
    path_segment: "usuarios",
    primary_key: "id",
    columns: &[
        ColumnDef { name: "nome", sql_type: SqlType::Varchar(120) },
        ColumnDef { name: "email", sql_type: SqlType::Varchar(120) },
        ColumnDef { name: "senha", sql_type: SqlType::Varchar(8) },
    ],
    not_found: "Usuário não encontrado.",
};

/// A stored user. The password is kept and returned as plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    #[sqlx(rename = "senha")]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(rename = "nome")]
    #[schema(max_length = 120)]
    pub name: String,
    #[schema(max_length = 120)]
    pub email: String,
    #[serde(rename = "senha")]
    #[schema(max_length = 8)]
    pub password: String,
}

impl Resource for User {
    type Payload = UserPayload;

    const ENTITY: &'static EntityDef = &USER_ENTITY;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(payload: &UserPayload) -> Vec<PgBindValue> {
        vec![
            payload.name.as_str().into(),
            payload.email.as_str().into(),
            payload.password.as_str().into(),
        ]
    }

    fn from_payload(id: i32, payload: &UserPayload) -> Self {
        User {
            id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            password: payload.password.clone(),
        }
    }
}
