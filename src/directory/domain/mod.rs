//! Domain model for the user and department directory.
//!
//! Directory values are read-only inputs to the task engine; they are
//! reconstructed from persistence and never mutated here.

mod department;
mod error;
mod ids;
mod user;

pub use department::{Department, PersistedDepartmentData};
pub use error::DirectoryDomainError;
pub use ids::{DepartmentId, UserId};
pub use user::{EmailAddress, PersistedUserData, User};
