use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::account::{hash_password, Role, RoleRequest, User, UserRequest};
use crate::schema::{roles, users};

/// The stored password digest is selected but never leaves this module.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserValues {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserRequest> for UserValues {
    fn from(request: &UserRequest) -> Self {
        Self {
            firstname: request.firstname.clone(),
            lastname: request.lastname.clone(),
            email: request.email.to_lowercase(),
            password: hash_password(&request.password),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoleRow {
    pub id: i32,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(RoleRow => Role { id, role_name, created_at, updated_at, deleted_at });

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = roles)]
pub struct RoleValues {
    pub role_name: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(RoleRequest => RoleValues { role_name });
