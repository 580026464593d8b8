//! Process configuration loaded once at startup
//!
//! All settings come from environment variables, with a `.env` file in the
//! working directory honored first. The Google service-account credential
//! arrives as a JSON blob in the environment and is materialized to a local
//! file for the spreadsheet client to consume.
//!
//! ## Required variables
//! - `GOOGLE_SHEET_NAME`: name of the roster spreadsheet
//! - `GOOGLE_CREDENTIALS_JSON`: service-account key as a JSON string
//! - `CAPTURE_API_URL`: base URL of the capture service API
//! - `CAPTURE_API_TOKEN`: bearer token sent with every capture request

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CoordinatorError, CoordinatorResult};

/// Local file the credential blob is written to
const CREDENTIALS_FILE: &str = "google_credentials.json";

/// The backend holds the slot state on this fixed record
const RECORD_ID: &str = "1";

/// Explicit process configuration, constructed at entry and injected into
/// each component
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the roster spreadsheet
    pub sheet_name: String,
    /// Base URL of the capture service API
    pub capture_api_url: String,
    /// Token sent with every capture service request
    pub capture_api_token: String,
    /// Identifier of the backend record holding the slot state
    pub record_id: String,
    /// Path of the materialized service-account key file
    pub credentials_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads a `.env` file if present, validates that every required
    /// variable is set, and writes the credential blob to
    /// `google_credentials.json` in the working directory.
    pub fn from_env() -> CoordinatorResult<Self> {
        // Silently ignores a missing .env file
        let _ = dotenv::dotenv();

        let sheet_name = require_var("GOOGLE_SHEET_NAME")?;
        let credentials_json = require_var("GOOGLE_CREDENTIALS_JSON")?;
        let capture_api_url = require_var("CAPTURE_API_URL")?;
        let capture_api_token = require_var("CAPTURE_API_TOKEN")?;

        let credentials_path =
            materialize_credentials(&credentials_json, Path::new(CREDENTIALS_FILE))?;

        tracing::debug!("🔑 Credential file written to {}", credentials_path.display());

        Ok(Self {
            sheet_name,
            capture_api_url,
            capture_api_token,
            record_id: RECORD_ID.to_string(),
            credentials_path,
        })
    }
}

fn require_var(name: &str) -> CoordinatorResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoordinatorError::Configuration {
            field: name.to_string(),
        })
}

/// Write the credential blob to `path`, unescaping the `\n` sequences the
/// environment forces into the PEM private key
fn materialize_credentials(raw: &str, path: &Path) -> CoordinatorResult<PathBuf> {
    let mut credentials: Value =
        serde_json::from_str(raw).map_err(|e| CoordinatorError::Credential {
            message: format!("GOOGLE_CREDENTIALS_JSON is not valid JSON: {e}"),
        })?;

    if let Some(Value::String(key)) = credentials.get_mut("private_key") {
        *key = key.replace("\\n", "\n");
    }

    std::fs::write(path, serde_json::to_string_pretty(&credentials)?)?;
    Ok(path.to_path_buf())
}
