//! User and department read models.
//!
//! The directory is the engine's view of identities: users with their role
//! and department, and the departments themselves. Taskdesk never creates
//! or mutates these rows; it resolves them to authorize task operations
//! and to validate assignees. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
