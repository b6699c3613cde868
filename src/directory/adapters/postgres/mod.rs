//! `PostgreSQL` adapters for directory lookups.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{DirectoryPgPool, PostgresDirectoryRepository};
