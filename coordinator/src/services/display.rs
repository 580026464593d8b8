//! Console implementation of the operator display surface
//!
//! Renders the workflow's prompts and outcome screens on the terminal and
//! collects operator input line by line. All pacing and layout live here;
//! the coordinator never touches the terminal directly.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tokio::time::sleep;

use shared::{MenuAction, SubmissionSummary};

use crate::error::{CoordinatorError, CoordinatorResult};
use crate::traits::DisplaySurface;

/// Delay after a status line so the operator can read it
const STATUS_PACING: Duration = Duration::from_secs(1);

/// Real display surface writing to stdout and reading stdin
pub struct RealDisplaySurface {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl RealDisplaySurface {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Next input line, or None when stdin is closed
    async fn read_line(&self) -> CoordinatorResult<Option<String>> {
        let mut input = self.input.lock().await;
        Ok(input.next_line().await?)
    }

    async fn wait_for_dismissal(&self) {
        prompt("\nPress Enter to close.\n");
        let _ = self.read_line().await;
    }
}

impl Default for RealDisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DisplaySurface for RealDisplaySurface {
    async fn show_status(&self, message: &str) {
        println!("\n{message}");
        sleep(STATUS_PACING).await;
    }

    async fn main_menu(&self) -> CoordinatorResult<MenuAction> {
        loop {
            println!("\nChoose Action");
            println!("  [1] {}", MenuAction::ParticipantSelection);
            println!("  [2] {}", MenuAction::ClearSelection);
            println!("      Clear fields only if no one is currently running an experiment");
            prompt("> ");

            match self.read_line().await? {
                Some(line) => match line.trim() {
                    "1" => return Ok(MenuAction::ParticipantSelection),
                    "2" => return Ok(MenuAction::ClearSelection),
                    _ => println!("Please enter 1 or 2."),
                },
                None => return Err(closed_input()),
            }
        }
    }

    async fn confirm(&self, message: &str) -> CoordinatorResult<bool> {
        prompt(&format!("\n{message} [y/N] "));
        match self.read_line().await? {
            Some(line) => {
                let answer = line.trim().to_ascii_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            None => Err(closed_input()),
        }
    }

    async fn prompt_participant_id(&self) -> CoordinatorResult<Option<String>> {
        prompt("\nEnter Participant ID: ");
        match self.read_line().await? {
            Some(line) => {
                let id = line.trim().to_string();
                Ok(if id.is_empty() { None } else { Some(id) })
            }
            None => Ok(None),
        }
    }

    async fn show_terminal(&self, message: &str) {
        println!("\n{message}");
        self.wait_for_dismissal().await;
    }

    async fn show_summary(&self, summary: &SubmissionSummary) {
        println!("\n{}", format_summary(summary));
        self.wait_for_dismissal().await;
    }
}

fn prompt(text: &str) {
    use std::io::Write;
    print!("{text}");
    let _ = std::io::stdout().flush();
}

fn closed_input() -> CoordinatorError {
    CoordinatorError::Display {
        message: "input stream closed".to_string(),
    }
}

/// Multi-line success screen shown after a submission
pub(crate) fn format_summary(summary: &SubmissionSummary) -> String {
    format!(
        "Success!\n\n\
         Selected Participant: {}\n\
         Slot used: {} of 2\n\
         Environment Type: {}\n\
         MEG Type: {}",
        summary.participant_id, summary.slot, summary.environment, summary.modality
    )
}
