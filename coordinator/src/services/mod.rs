//! Service implementations
//!
//! This module contains real implementations of all service traits.
//! These are the production implementations that handle actual I/O
//! operations against the spreadsheet, the capture backend, and the
//! operator console.

pub mod capture;
pub mod display;
pub mod roster;

#[cfg(test)]
pub mod tests;

// Re-export all service implementations
pub use capture::RealCaptureBackend;
pub use display::RealDisplaySurface;
pub use roster::RealRosterSource;
