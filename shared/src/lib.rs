//! Shared types for the capture readiness workflow
//!
//! Contains the domain types passed between the coordinator's collaborators
//! (roster source, capture backend, display surface) plus the common error
//! enum and tracing setup. Component-internal types stay in the coordinator
//! crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
