//! Category code mapping between roster labels and backend coded fields
//!
//! The roster sheet carries free-text environment and modality labels; the
//! backend stores them as small integer codes. Both code tables are fixed
//! and closed. Unrecognized labels degrade to an empty-string code rather
//! than failing the mapping, and an unrecognized code displays as
//! "Unknown" in the operator summary.

use shared::{RosterRow, Slot, SubmissionRecord};

use crate::error::{CoordinatorError, CoordinatorResult};

/// Environment label → backend code
pub fn environment_code(label: &str) -> Option<&'static str> {
    match label {
        "Correct" => Some("0"),
        "Incorrect" => Some("1"),
        "Random" => Some("2"),
        _ => None,
    }
}

/// Modality label → backend code
pub fn modality_code(label: &str) -> Option<&'static str> {
    match label {
        "Audio/Visual" => Some("0"),
        "Visual/Audio" => Some("1"),
        "Audiovisual" => Some("2"),
        _ => None,
    }
}

/// Environment code → operator-facing display phrase
pub fn environment_phrase(code: &str) -> &'static str {
    match code {
        "0" => "Correct (1,2,3), Incorrect (4,5,6)",
        "1" => "Incorrect (1,2,3), Correct (4,5,6)",
        "2" => "Random",
        _ => "Unknown",
    }
}

/// Modality code → operator-facing display phrase
pub fn modality_phrase(code: &str) -> &'static str {
    match code {
        "0" => "Audio, Visual",
        "1" => "Visual, Audio",
        "2" => "Audiovisual",
        _ => "Unknown",
    }
}

/// Translate a roster row into a submission record for `slot`
///
/// Fails only when the row is too short to carry both category columns.
pub fn map_row(row: &RosterRow, slot: Slot, record_id: &str) -> CoordinatorResult<SubmissionRecord> {
    if row.len() < RosterRow::MIN_MAPPABLE_COLUMNS {
        return Err(CoordinatorError::RowTooShort {
            columns: row.len(),
            expected: RosterRow::MIN_MAPPABLE_COLUMNS,
        });
    }

    let environment_label = row.cell(RosterRow::ENVIRONMENT).unwrap_or("").trim();
    let modality_label = row.cell(RosterRow::MODALITY).unwrap_or("").trim();

    Ok(SubmissionRecord {
        record_id: record_id.to_string(),
        slot,
        participant_id: row.participant_id().to_string(),
        environment_code: environment_code(environment_label).unwrap_or("").to_string(),
        modality_code: modality_code(modality_label).unwrap_or("").to_string(),
    })
}
