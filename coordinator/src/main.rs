//! Main entry point for the coordinator binary
//!
//! Loads the process configuration, wires the real service implementations
//! into the coordinator, and runs the workflow once.

use clap::Parser;

use coordinator::{
    services::{RealCaptureBackend, RealDisplaySurface, RealRosterSource},
    Config, Coordinator, CoordinatorResult,
};
use shared::logging;

/// Coordinator for submitting roster participants into capture slots
#[derive(Parser)]
#[command(name = "coordinator")]
#[command(about = "Coordinates participant readiness between the roster sheet and the capture service")]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> CoordinatorResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("capture readiness coordinator");

    // Configuration is loaded once here and injected into each service
    let config = Config::from_env()?;

    let roster = RealRosterSource::new(&config);
    let backend = RealCaptureBackend::new(&config);
    let display = RealDisplaySurface::new();

    let coordinator = Coordinator::new(roster, backend, display, config.record_id.clone());
    let outcome = coordinator.run().await;

    if outcome.wrote_remote_state() {
        logging::log_success("Workflow changed remote slot state");
    }
    tracing::debug!("Workflow outcome: {:?}", outcome);

    logging::log_shutdown("workflow complete");
    Ok(())
}
