//! Diesel schema for task lifecycle persistence.

use crate::directory::adapters::postgres::schema::users;

diesel::table! {
    /// Task records with lifecycle state and user references.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority tier.
        #[max_length = 50]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
        /// Completion timestamp, kept after leaving the done status.
        completed_at -> Nullable<Timestamptz>,
        /// Creator user reference.
        created_by -> Uuid,
        /// Current assignee user reference.
        assigned_to -> Uuid,
        /// Database-assigned arrival stamp; stable tie-break for listings.
        sequence -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, users);
