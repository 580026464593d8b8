//! Test helpers for building mocked coordinators
//!
//! The helpers configure the service mocks for the common happy paths;
//! tests tighten individual expectations (call counts, argument checks)
//! where a scenario depends on them.

use std::sync::{Arc, Mutex};

use coordinator::traits::{MockCaptureBackend, MockDisplaySurface, MockRosterSource};
use shared::{MenuAction, ReadinessFlags, RosterRow, SubmissionSummary};

/// Captured display output for assertions
///
/// Records every terminal message and summary screen the coordinator
/// renders, since the mocks otherwise swallow them.
#[derive(Clone, Default)]
pub struct ScreenLog {
    terminals: Arc<Mutex<Vec<String>>>,
    summaries: Arc<Mutex<Vec<SubmissionSummary>>>,
}

impl ScreenLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire the capture expectations into a display mock
    pub fn record_into(&self, display: &mut MockDisplaySurface) {
        display.expect_show_status().returning(|_| ());

        let terminals = self.terminals.clone();
        display
            .expect_show_terminal()
            .returning(move |message| terminals.lock().unwrap().push(message.to_string()));

        let summaries = self.summaries.clone();
        display
            .expect_show_summary()
            .returning(move |summary| summaries.lock().unwrap().push(summary.clone()));
    }

    pub fn terminal_messages(&self) -> Vec<String> {
        self.terminals.lock().unwrap().clone()
    }

    pub fn summaries(&self) -> Vec<SubmissionSummary> {
        self.summaries.lock().unwrap().clone()
    }
}

/// Mock construction utilities
pub struct TestHelpers;

impl TestHelpers {
    /// A backend that connects and reports the given readiness flags
    pub fn connected_backend(flags: ReadinessFlags) -> MockCaptureBackend {
        let mut backend = MockCaptureBackend::new();
        backend.expect_check_connectivity().returning(|| Ok(()));
        backend.expect_ready_flags().returning(move || Ok(flags));
        backend
    }

    /// A display that picks participant selection and enters `participant`
    pub fn selection_display(participant: &str, log: &ScreenLog) -> MockDisplaySurface {
        let mut display = MockDisplaySurface::new();
        display
            .expect_main_menu()
            .returning(|| Ok(MenuAction::ParticipantSelection));

        let id = participant.to_string();
        display
            .expect_prompt_participant_id()
            .returning(move || Ok(Some(id.clone())));

        log.record_into(&mut display);
        display
    }

    /// A display that picks the clear action and answers the confirmation
    pub fn clear_display(confirmed: bool, log: &ScreenLog) -> MockDisplaySurface {
        let mut display = MockDisplaySurface::new();
        display
            .expect_main_menu()
            .returning(|| Ok(MenuAction::ClearSelection));
        display.expect_confirm().returning(move |_| Ok(confirmed));

        log.record_into(&mut display);
        display
    }

    /// A roster source returning the given rows
    pub fn roster_of(rows: Vec<RosterRow>) -> MockRosterSource {
        let mut roster = MockRosterSource::new();
        roster
            .expect_fetch_all_rows()
            .returning(move || Ok(rows.clone()));
        roster
    }

    /// A roster source that must never be consulted
    pub fn untouched_roster() -> MockRosterSource {
        let mut roster = MockRosterSource::new();
        roster
            .expect_fetch_all_rows()
            .times(0)
            .returning(|| Ok(Vec::new()));
        roster
    }
}
