//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status as its canonical storage string.
    pub status: String,
    /// Priority as its canonical storage string.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creator user reference.
    pub created_by: uuid::Uuid,
    /// Current assignee user reference.
    pub assigned_to: uuid::Uuid,
    /// Database-assigned arrival stamp.
    pub sequence: i64,
}

/// Insert model for task records.
///
/// The arrival stamp is assigned by the database sequence and never
/// written from here.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Priority tier.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creator user reference.
    pub created_by: uuid::Uuid,
    /// Current assignee user reference.
    pub assigned_to: uuid::Uuid,
}
