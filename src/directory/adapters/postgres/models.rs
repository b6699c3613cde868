//! Diesel row models for directory lookups.

use super::schema::{departments, users};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Full display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Department membership.
    pub department_id: uuid::Uuid,
    /// Privilege tier as its canonical storage string.
    pub role: String,
}

/// Query result row for department records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentRow {
    /// Department identifier.
    pub id: uuid::Uuid,
    /// Department name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the department is active.
    pub is_active: bool,
}
