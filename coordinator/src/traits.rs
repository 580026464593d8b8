//! Trait definitions with mockall annotations for testing
//!
//! These traits are the seams between the workflow coordinator and its
//! external collaborators (roster spreadsheet, capture backend, operator
//! display). They are used for dependency injection and enable testing the
//! whole workflow without any network or terminal.

use shared::{MenuAction, ReadinessFlags, RosterRow, SubmissionRecord, SubmissionSummary};

use crate::error::CoordinatorResult;

/// Roster spreadsheet abstraction
///
/// The roster is a read-only tabular source of participant attributes
/// keyed by identifier in the first column.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch every row of the roster's first worksheet as string cells
    ///
    /// # Returns
    /// All rows in sheet order; transport and auth failures surface as
    /// errors for the coordinator to convert into a terminal outcome
    async fn fetch_all_rows(&self) -> CoordinatorResult<Vec<RosterRow>>;
}

/// Capture backend abstraction
///
/// The backend holds the two slot assignments and their readiness flags on
/// a single fixed record, and accepts flat key-value record writes.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Probe the backend's version endpoint
    ///
    /// # Returns
    /// Ok on an HTTP-success status; any transport error or non-success
    /// status is a connectivity failure
    async fn check_connectivity(&self) -> CoordinatorResult<()>;

    /// Read both slots' readiness flags with a single filtered query
    ///
    /// # Returns
    /// The flag pair, or `NoMatchingRecord` when the filter matches
    /// nothing (distinct from the flags being occupied)
    async fn ready_flags(&self) -> CoordinatorResult<ReadinessFlags>;

    /// Post one submission record to the backend's record-write endpoint
    ///
    /// # Returns
    /// Whether the transport reported an HTTP-success status; the
    /// backend's own acceptance body is not inspected
    async fn submit(&self, record: &SubmissionRecord) -> CoordinatorResult<bool>;

    /// Reset both slots' participant assignment and readiness flags
    ///
    /// # Returns
    /// Whether the transport reported an HTTP-success status
    async fn clear_slots(&self) -> CoordinatorResult<bool>;
}

/// Operator display abstraction
///
/// Owns all rendering and input collection. The coordinator only sequences
/// calls; pacing and layout live behind this trait.
#[mockall::automock]
#[async_trait::async_trait]
pub trait DisplaySurface: Send + Sync {
    /// Render a transient status line (no acknowledgement expected)
    async fn show_status(&self, message: &str);

    /// Present the title menu and return the chosen action
    async fn main_menu(&self) -> CoordinatorResult<MenuAction>;

    /// Ask a yes/no question
    ///
    /// # Returns
    /// true only on an explicit affirmative answer
    async fn confirm(&self, message: &str) -> CoordinatorResult<bool>;

    /// Prompt for a participant identifier
    ///
    /// # Returns
    /// The entered identifier stripped of surrounding whitespace, or None
    /// when the operator entered nothing or closed the input
    async fn prompt_participant_id(&self) -> CoordinatorResult<Option<String>>;

    /// Render a terminal message and wait for the operator to dismiss it
    async fn show_terminal(&self, message: &str);

    /// Render the multi-line success summary and wait for dismissal
    async fn show_summary(&self, summary: &SubmissionSummary);
}
