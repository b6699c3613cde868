//! Port contracts for directory lookups.
//!
//! Ports define infrastructure-agnostic interfaces used by directory and
//! task services.

pub mod repository;

pub use repository::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult};
