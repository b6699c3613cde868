//! Diesel schema for directory persistence.

diesel::table! {
    /// Departments users belong to.
    departments (id) {
        /// Department identifier.
        id -> Uuid,
        /// Department name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Whether the department is active.
        is_active -> Bool,
    }
}

diesel::table! {
    /// Users with role and department membership.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Full display name.
        #[max_length = 255]
        full_name -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Department the user belongs to.
        department_id -> Uuid,
        /// Privilege tier.
        #[max_length = 50]
        role -> Varchar,
    }
}

diesel::joinable!(users -> departments (department_id));
diesel::allow_tables_to_appear_in_same_query!(users, departments);
