//! Core domain types shared across the workflow components

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// One of the two capture slots held by the backend record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Field-name suffix used by the backend for this slot
    pub fn suffix(&self) -> &'static str {
        match self {
            Slot::One => "1",
            Slot::Two => "2",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Operator action chosen on the title menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    ParticipantSelection,
    ClearSelection,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::ParticipantSelection => write!(f, "Participant Selection"),
            MenuAction::ClearSelection => write!(f, "Clear Selection Fields"),
        }
    }
}

/// A single roster row as returned by the spreadsheet source
///
/// Cells are plain strings in sheet column order. The well-known column
/// positions below must match the roster sheet layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow(pub Vec<String>);

impl RosterRow {
    /// Participant identifier, compared by exact string equality
    pub const PARTICIPANT_ID: usize = 0;
    /// Free-text environment label (column G)
    pub const ENVIRONMENT: usize = 6;
    /// Free-text modality label (column I)
    pub const MODALITY: usize = 8;
    /// Completion-status string, present only on finished rows (column K)
    pub const COMPLETION_STATUS: usize = 10;
    /// A row needs this many columns to be mappable
    pub const MIN_MAPPABLE_COLUMNS: usize = 9;

    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Build a row from string literals (test convenience)
    pub fn from_cells(cells: &[&str]) -> Self {
        Self(cells.iter().map(|c| c.to_string()).collect())
    }

    /// Cell at `index`, if the row extends that far
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Participant identifier cell, empty string when the row is empty
    pub fn participant_id(&self) -> &str {
        self.cell(Self::PARTICIPANT_ID).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Readiness flags for both capture slots as reported by the backend
///
/// A flag of 0 means the slot is open for a new submission; any non-zero
/// value means occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessFlags {
    pub ready_1: i64,
    pub ready_2: i64,
}

impl ReadinessFlags {
    pub fn new(ready_1: i64, ready_2: i64) -> Self {
        Self { ready_1, ready_2 }
    }

    /// Parse both flags out of a flat backend record
    ///
    /// A field absent from the record defaults to 0; a present but
    /// non-integer value is an error.
    pub fn from_record(record: &Map<String, Value>) -> SharedResult<Self> {
        Ok(Self {
            ready_1: parse_flag(record, "ready_1")?,
            ready_2: parse_flag(record, "ready_2")?,
        })
    }

    /// Slot to submit into, preferring slot 1 when both are open
    pub fn open_slot(&self) -> Option<Slot> {
        if self.ready_1 == 0 {
            Some(Slot::One)
        } else if self.ready_2 == 0 {
            Some(Slot::Two)
        } else {
            None
        }
    }
}

fn parse_flag(record: &Map<String, Value>, field: &str) -> SharedResult<i64> {
    match record.get(field) {
        None => Ok(0),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| SharedError::InvalidFlag {
            field: field.to_string(),
            value: n.to_string(),
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| SharedError::InvalidFlag {
            field: field.to_string(),
            value: s.clone(),
        }),
        Some(other) => Err(SharedError::InvalidFlag {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

/// A flat record written to the backend's record endpoint
///
/// Field names on the wire carry the slot suffix; `to_fields` performs the
/// flattening.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub record_id: String,
    pub slot: Slot,
    pub participant_id: String,
    pub environment_code: String,
    pub modality_code: String,
}

impl SubmissionRecord {
    /// Flatten into the backend's suffixed field names
    pub fn to_fields(&self) -> Map<String, Value> {
        let suffix = self.slot.suffix();
        let mut fields = Map::new();
        fields.insert("record_id".to_string(), Value::String(self.record_id.clone()));
        fields.insert(
            format!("selected_participant_{suffix}"),
            Value::String(self.participant_id.clone()),
        );
        fields.insert(
            format!("environment_type_{suffix}"),
            Value::String(self.environment_code.clone()),
        );
        fields.insert(
            format!("meg_type_{suffix}"),
            Value::String(self.modality_code.clone()),
        );
        fields
    }
}

/// Operator-facing summary of a successful submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub participant_id: String,
    pub slot: Slot,
    pub environment: String,
    pub modality: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_slot_suffixes() {
        assert_eq!(Slot::One.suffix(), "1");
        assert_eq!(Slot::Two.suffix(), "2");
        assert_eq!(Slot::Two.to_string(), "2");
    }

    #[test]
    fn test_roster_row_cells() {
        let row = RosterRow::from_cells(&["7", "a", "b"]);
        assert_eq!(row.participant_id(), "7");
        assert_eq!(row.cell(2), Some("b"));
        assert_eq!(row.cell(10), None);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_flags_from_record_strings() {
        let rec = record(json!({"ready_1": "0", "ready_2": "1"}));
        let flags = ReadinessFlags::from_record(&rec).unwrap();
        assert_eq!(flags, ReadinessFlags::new(0, 1));
    }

    #[test]
    fn test_flags_missing_fields_default_to_zero() {
        let rec = record(json!({"ready_2": "3"}));
        let flags = ReadinessFlags::from_record(&rec).unwrap();
        assert_eq!(flags, ReadinessFlags::new(0, 3));
    }

    #[test]
    fn test_flags_reject_non_numeric_values() {
        let rec = record(json!({"ready_1": ""}));
        assert!(ReadinessFlags::from_record(&rec).is_err());

        let rec = record(json!({"ready_1": "yes"}));
        assert!(ReadinessFlags::from_record(&rec).is_err());
    }

    #[test]
    fn test_open_slot_prefers_slot_one() {
        assert_eq!(ReadinessFlags::new(0, 0).open_slot(), Some(Slot::One));
        assert_eq!(ReadinessFlags::new(0, 1).open_slot(), Some(Slot::One));
        assert_eq!(ReadinessFlags::new(1, 0).open_slot(), Some(Slot::Two));
        assert_eq!(ReadinessFlags::new(1, 1).open_slot(), None);
    }

    #[test]
    fn test_submission_record_field_names_carry_slot_suffix() {
        let rec = SubmissionRecord {
            record_id: "1".to_string(),
            slot: Slot::Two,
            participant_id: "42".to_string(),
            environment_code: "0".to_string(),
            modality_code: "2".to_string(),
        };

        let fields = rec.to_fields();
        assert_eq!(fields["record_id"], json!("1"));
        assert_eq!(fields["selected_participant_2"], json!("42"));
        assert_eq!(fields["environment_type_2"], json!("0"));
        assert_eq!(fields["meg_type_2"], json!("2"));
        assert!(!fields.contains_key("selected_participant_1"));
    }
}
