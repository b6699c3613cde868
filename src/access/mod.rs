//! Static access policy for task operations.
//!
//! Authorization in taskdesk is a closed table over three roles and seven
//! actions, evaluated by a pure function with no storage access and no
//! side effects. Callers resolve the acting user's [`Role`] and its
//! relationship to the target task, then ask [`authorize`] before touching
//! any task field.

mod policy;

pub use policy::{
    AccessDecision, AccessDenied, ParseRoleError, Role, TaskAction, TaskRelation, authorize,
    evaluate,
};

#[cfg(test)]
mod tests;
