//! Query services for the directory.

mod queries;

pub use queries::{DirectoryService, DirectoryServiceError, DirectoryServiceResult};
