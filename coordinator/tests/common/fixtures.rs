//! Test fixtures and data for workflow tests
//!
//! This module provides consistent roster rows and identifiers used across
//! the integration suite.

use shared::RosterRow;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Identifier used by most scenarios
    pub const PARTICIPANT: &'static str = "42";

    /// Fixed backend record id
    pub const RECORD_ID: &'static str = "1";

    /// A mappable row with recognized labels in the category columns
    pub fn mappable_row() -> RosterRow {
        Self::row_with_labels(Self::PARTICIPANT, "Correct", "Audio/Visual")
    }

    /// A mappable row with the given identifier and category labels
    pub fn row_with_labels(id: &str, environment: &str, modality: &str) -> RosterRow {
        RosterRow::from_cells(&[id, "c1", "c2", "c3", "c4", "c5", environment, "c7", modality])
    }

    /// A row whose completion-status column marks the participant done
    pub fn completed_row(id: &str) -> RosterRow {
        RosterRow::from_cells(&[
            id, "c1", "c2", "c3", "c4", "c5", "Correct", "c7", "Audio/Visual", "c9", "Complete",
        ])
    }

    /// A row too short to be mappable
    pub fn short_row(id: &str) -> RosterRow {
        RosterRow::from_cells(&[id, "c1", "c2"])
    }

    /// A small roster where the standard participant is absent
    pub fn roster_without_participant() -> Vec<RosterRow> {
        vec![
            Self::row_with_labels("7", "Random", "Audiovisual"),
            Self::row_with_labels("8", "Incorrect", "Visual/Audio"),
        ]
    }
}
