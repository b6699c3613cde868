//! Taskdesk: role-aware task tracking engine.
//!
//! This crate provides the business core of a task-tracking backend:
//! deciding, for every task mutation, whether the acting user is permitted
//! to perform it, and driving tasks through their lifecycle. Transport,
//! credential issuance, and schema migration live outside the crate and
//! talk to it through plain data records and port traits.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`access`]: Static role policy and the allow/deny evaluator
//! - [`directory`]: User and department read models
//! - [`task`]: Task lifecycle management and filtered retrieval

pub mod access;
pub mod directory;
pub mod task;
