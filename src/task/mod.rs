//! Task lifecycle management for taskdesk.
//!
//! This module implements the mutable unit of work: creating tasks,
//! editing their content, moving them between statuses, reprioritizing,
//! reassigning, deleting, and filtered paginated retrieval. Every mutation
//! consults the [`crate::access`] policy before any field is touched. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
