//! Common test infrastructure for workflow tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{ScreenLog, TestHelpers};
