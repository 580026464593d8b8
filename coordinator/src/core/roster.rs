//! Roster lookup and completion checks over a fetched row snapshot

use shared::RosterRow;

/// Find the first row whose identifier column equals `participant_id`
///
/// Exact string equality, no case folding, no trimming of the stored cell.
pub fn find_row<'a>(rows: &'a [RosterRow], participant_id: &str) -> Option<&'a RosterRow> {
    rows.iter().find(|row| row.participant_id() == participant_id)
}

/// Whether the row's completion-status column marks the participant done
///
/// Only rows long enough to carry the status column can be complete.
pub fn is_marked_complete(row: &RosterRow) -> bool {
    row.cell(RosterRow::COMPLETION_STATUS)
        .map(|status| status.trim().eq_ignore_ascii_case("complete"))
        .unwrap_or(false)
}
