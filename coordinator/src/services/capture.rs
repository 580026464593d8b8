//! Production capture backend client
//!
//! The capture service exposes a form-encoded POST API at a single base
//! URL; the operation is selected by the `content` field and every request
//! carries the bearer token field. Slot state lives on one fixed record.
//!
//! Success of the state-changing calls is judged by the transport status
//! class only; the service's own acceptance body is not parsed. There is
//! no compare-and-swap on the readiness flags, so concurrent operators can
//! race between the readiness read and the record write.

use serde_json::{Map, Value};
use tracing::debug;

use shared::{ReadinessFlags, SubmissionRecord};

use crate::config::Config;
use crate::error::{CoordinatorError, CoordinatorResult};
use crate::traits::CaptureBackend;

/// Fields requested by the readiness query
const READY_FIELDS: &[&str] = &[
    "ready_1",
    "ready_2",
    "selected_participant_1",
    "environment_type_1",
    "meg_type_1",
    "selected_participant_2",
    "environment_type_2",
    "meg_type_2",
];

/// Sentinel written into a cleared slot's participant assignment
const CLEARED_PARTICIPANT: &str = "-1";

/// Real capture backend client over HTTP
pub struct RealCaptureBackend {
    client: reqwest::Client,
    api_url: String,
    token: String,
    record_id: String,
}

impl RealCaptureBackend {
    /// Create a new client from the process configuration
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.capture_api_url.clone(),
            token: config.capture_api_token.clone(),
            record_id: config.record_id.clone(),
        }
    }

    /// Post one flat record as a single-element batch to the record-write
    /// endpoint
    async fn post_record(&self, record: Map<String, Value>) -> CoordinatorResult<reqwest::StatusCode> {
        let data = serde_json::to_string(&vec![Value::Object(record)])?;
        let form = [
            ("token", self.token.as_str()),
            ("content", "record"),
            ("format", "json"),
            ("type", "flat"),
            ("data", data.as_str()),
        ];

        let response = self.client.post(&self.api_url).form(&form).send().await?;
        Ok(response.status())
    }
}

#[async_trait::async_trait]
impl CaptureBackend for RealCaptureBackend {
    async fn check_connectivity(&self) -> CoordinatorResult<()> {
        let form = [("token", self.token.as_str()), ("content", "version")];
        let response = self.client.post(&self.api_url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoordinatorError::BackendStatus {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn ready_flags(&self) -> CoordinatorResult<ReadinessFlags> {
        let filter = format!("[record_id] = {}", self.record_id);
        let fields = READY_FIELDS.join(",");
        let form = [
            ("token", self.token.as_str()),
            ("content", "record"),
            ("format", "json"),
            ("type", "flat"),
            ("filterLogic", filter.as_str()),
            ("fields", fields.as_str()),
        ];

        let response = self.client.post(&self.api_url).form(&form).send().await?;
        let body = response.text().await?;
        debug!("Capture service readiness response: {}", body);

        parse_ready_response(&body)
    }

    async fn submit(&self, record: &SubmissionRecord) -> CoordinatorResult<bool> {
        let status = self.post_record(record.to_fields()).await?;
        debug!("Record submit response status: {}", status);
        Ok(status.is_success())
    }

    async fn clear_slots(&self) -> CoordinatorResult<bool> {
        let status = self.post_record(clear_record(&self.record_id)).await?;
        debug!("🔄 Clear readiness fields response: {}", status);
        Ok(status.is_success())
    }
}

/// Parse the readiness query response body into the flag pair
///
/// The endpoint returns a JSON array of matching records; an empty (or
/// non-array) result is the explicit no-matching-record error, distinct
/// from the flags being occupied.
pub(crate) fn parse_ready_response(body: &str) -> CoordinatorResult<ReadinessFlags> {
    let value: Value = serde_json::from_str(body)?;

    let record = value
        .as_array()
        .and_then(|records| records.first())
        .and_then(Value::as_object)
        .ok_or(CoordinatorError::NoMatchingRecord)?;

    Ok(ReadinessFlags::from_record(record)?)
}

/// The fixed record that resets both slots
pub(crate) fn clear_record(record_id: &str) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("record_id".to_string(), Value::String(record_id.to_string()));
    record.insert(
        "selected_participant_1".to_string(),
        Value::String(CLEARED_PARTICIPANT.to_string()),
    );
    record.insert(
        "selected_participant_2".to_string(),
        Value::String(CLEARED_PARTICIPANT.to_string()),
    );
    record.insert("ready_1".to_string(), Value::String("0".to_string()));
    record.insert("ready_2".to_string(), Value::String("0".to_string()));
    record
}
