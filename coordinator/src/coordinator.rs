//! Main workflow coordinator implementation
//!
//! Sequences the readiness workflow across the injected collaborators:
//! connect → menu → (clear | gate check → prompt → fetch → map → submit).
//! Every branch is strictly linear with no retries; each run lands in one
//! terminal [`WorkflowOutcome`] and renders exactly one closing message or
//! summary on the display surface.

use tracing::{debug, info};

use shared::logging;
use shared::{MenuAction, SubmissionSummary};

use crate::core::{mapper, roster, WorkflowOutcome};
use crate::error::{CoordinatorError, CoordinatorResult};
use crate::traits::{CaptureBackend, DisplaySurface, RosterSource};

/// Main coordinator that drives the readiness workflow
pub struct Coordinator<R, C, D>
where
    R: RosterSource,
    C: CaptureBackend,
    D: DisplaySurface,
{
    roster: R,
    backend: C,
    display: D,
    record_id: String,
}

impl<R, C, D> Coordinator<R, C, D>
where
    R: RosterSource,
    C: CaptureBackend,
    D: DisplaySurface,
{
    /// Create a new coordinator with injected dependencies
    pub fn new(roster: R, backend: C, display: D, record_id: String) -> Self {
        Self {
            roster,
            backend,
            display,
            record_id,
        }
    }

    /// Run the workflow once, from connectivity check to terminal state
    pub async fn run(&self) -> WorkflowOutcome {
        self.display.show_status("Connecting to capture service...").await;

        if let Err(e) = self.backend.check_connectivity().await {
            logging::log_error("Connectivity check", &e);
            let message = match e {
                CoordinatorError::BackendStatus { .. } => "Failed to connect to capture service",
                _ => "Capture service connection error",
            };
            self.display.show_terminal(message).await;
            return WorkflowOutcome::ConnectivityFailed;
        }

        self.display.show_status("Connected to capture service").await;

        let action = match self.display.main_menu().await {
            Ok(action) => action,
            Err(e) => {
                // Operator closed the surface at the menu; end quietly
                logging::log_error("Menu choice", &e);
                return WorkflowOutcome::NoInput;
            }
        };
        info!("📋 Operator chose: {}", action);

        match action {
            MenuAction::ClearSelection => self.run_clear().await,
            MenuAction::ParticipantSelection => self.run_selection().await,
        }
    }

    /// Clear branch: confirm, then reset both slots
    async fn run_clear(&self) -> WorkflowOutcome {
        let confirmed = match self
            .display
            .confirm("Are you sure you want to clear the selection fields?")
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                logging::log_error("Clear confirmation", &e);
                false
            }
        };

        if !confirmed {
            self.display.show_terminal("Clear aborted.").await;
            return WorkflowOutcome::ClearAborted;
        }

        match self.backend.clear_slots().await {
            Ok(true) => {
                logging::log_success("Selection fields cleared");
                self.display.show_terminal("Fields cleared successfully.").await;
                WorkflowOutcome::Cleared
            }
            Ok(false) => {
                self.display.show_terminal("Failed to clear fields.").await;
                WorkflowOutcome::ClearFailed
            }
            Err(e) => {
                logging::log_error("Clear selection fields", &e);
                self.display.show_terminal("Failed to clear fields.").await;
                WorkflowOutcome::ClearFailed
            }
        }
    }

    /// Participant branch: gate check, prompt, fetch, map, submit
    async fn run_selection(&self) -> WorkflowOutcome {
        // Check slot readiness BEFORE asking for a participant id
        let flags = match self.backend.ready_flags().await {
            Ok(flags) => flags,
            Err(e) => {
                logging::log_error("Slot status read", &e);
                self.display.show_terminal("Could not read slot status").await;
                return WorkflowOutcome::GateReadFailed;
            }
        };
        debug!("🔎 Slot readiness: ready_1 = {}, ready_2 = {}", flags.ready_1, flags.ready_2);

        let slot = match flags.open_slot() {
            Some(slot) => slot,
            None => {
                self.display.show_terminal("No fields available").await;
                return WorkflowOutcome::NoSlotAvailable;
            }
        };

        let participant_id = match self.display.prompt_participant_id().await {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(_) => {
                self.display.show_terminal("No input. Exiting.").await;
                return WorkflowOutcome::NoInput;
            }
            Err(e) => {
                logging::log_error("Participant prompt", &e);
                self.display.show_terminal("No input. Exiting.").await;
                return WorkflowOutcome::NoInput;
            }
        };

        self.display.show_status("Fetching data...").await;

        // Collaborator failures past this point all land in the generic
        // unexpected-error terminal state; no partial remote state is
        // rolled back.
        match self.select_and_submit(&participant_id, slot).await {
            Ok(outcome) => outcome,
            Err(e) => {
                logging::log_error("Participant selection", &e);
                self.display.show_terminal("Unexpected error occurred").await;
                WorkflowOutcome::UnexpectedError
            }
        }
    }

    async fn select_and_submit(
        &self,
        participant_id: &str,
        slot: shared::Slot,
    ) -> CoordinatorResult<WorkflowOutcome> {
        let rows = self.roster.fetch_all_rows().await?;
        debug!("📄 Fetched {} roster rows", rows.len());

        let row = match roster::find_row(&rows, participant_id) {
            Some(row) => row,
            None => {
                self.display.show_terminal("ID not found in roster").await;
                return Ok(WorkflowOutcome::IdNotFound);
            }
        };

        if roster::is_marked_complete(row) {
            self.display
                .show_terminal("This participant is already marked complete.")
                .await;
            return Ok(WorkflowOutcome::AlreadyComplete);
        }

        let record = mapper::map_row(row, slot, &self.record_id)?;

        if !self.backend.submit(&record).await? {
            self.display.show_terminal("Failed to send to capture service").await;
            return Ok(WorkflowOutcome::SubmitFailed);
        }

        let summary = SubmissionSummary {
            participant_id: participant_id.to_string(),
            slot,
            environment: mapper::environment_phrase(&record.environment_code).to_string(),
            modality: mapper::modality_phrase(&record.modality_code).to_string(),
        };
        logging::log_success("Submission accepted");

        self.display.show_summary(&summary).await;
        Ok(WorkflowOutcome::Submitted(summary))
    }
}
