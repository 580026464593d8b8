//! Production roster source backed by the Google Sheets API
//!
//! Authenticates with the materialized service-account key via the OAuth2
//! JWT-bearer grant, resolves the spreadsheet by its exact name through the
//! Drive files listing, and fetches the first worksheet's full value range
//! as string cells. All reads happen once per workflow run; nothing is
//! cached between runs.

use std::path::PathBuf;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use shared::RosterRow;

use crate::config::Config;
use crate::error::{CoordinatorError, CoordinatorResult};
use crate::traits::RosterSource;

/// Read-only scopes for the spreadsheet fetch and the by-name lookup
const TOKEN_SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets.readonly https://www.googleapis.com/auth/drive.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// Unqualified A1 range, which the values endpoint applies to the first
/// worksheet
const VALUE_RANGE: &str = "A:ZZ";
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Service-account key fields consumed from the credential file
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
}

/// Claims of the signed token assertion
#[derive(Debug, Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    id: String,
}

/// Real roster source using the Sheets and Drive HTTP APIs
pub struct RealRosterSource {
    client: reqwest::Client,
    sheet_name: String,
    credentials_path: PathBuf,
}

impl RealRosterSource {
    /// Create a new roster source from the process configuration
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            sheet_name: config.sheet_name.clone(),
            credentials_path: config.credentials_path.clone(),
        }
    }

    /// Exchange the service-account key for a bearer token
    async fn access_token(&self) -> CoordinatorResult<String> {
        let raw = tokio::fs::read_to_string(&self.credentials_path).await?;
        let key: ServiceAccountKey = serde_json::from_str(&raw)?;

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            iss: &key.client_email,
            scope: TOKEN_SCOPES,
            aud: &key.token_uri,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        let signer = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            CoordinatorError::Credential {
                message: format!("service-account private key rejected: {e}"),
            }
        })?;
        let assertion =
            encode(&Header::new(Algorithm::RS256), &claims, &signer).map_err(|e| {
                CoordinatorError::Credential {
                    message: format!("failed to sign token assertion: {e}"),
                }
            })?;

        let response = self
            .client
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoordinatorError::TokenExchange {
                message: format!("status {status}: {body}"),
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Resolve the spreadsheet id from its exact name
    async fn resolve_spreadsheet_id(&self, token: &str) -> CoordinatorResult<String> {
        let query = drive_query(&self.sheet_name);
        let response = self
            .client
            .get(DRIVE_FILES_URL)
            .bearer_auth(token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id, name)"),
                ("pageSize", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoordinatorError::SheetStatus {
                status: status.as_u16(),
            });
        }

        let list: FileList = response.json().await?;
        list.files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| CoordinatorError::SheetNotFound {
                name: self.sheet_name.clone(),
            })
    }
}

#[async_trait::async_trait]
impl RosterSource for RealRosterSource {
    async fn fetch_all_rows(&self) -> CoordinatorResult<Vec<RosterRow>> {
        let token = self.access_token().await?;
        let spreadsheet_id = self.resolve_spreadsheet_id(&token).await?;
        debug!("📄 Resolved roster spreadsheet id: {}", spreadsheet_id);

        let url = format!("{SHEETS_BASE_URL}/{spreadsheet_id}/values/{VALUE_RANGE}");
        let response = self.client.get(&url).bearer_auth(&token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoordinatorError::SheetStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(values_to_rows(&body))
    }
}

/// Drive search expression matching exactly one live spreadsheet by name
pub(crate) fn drive_query(sheet_name: &str) -> String {
    format!(
        "name = '{}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
        sheet_name.replace('\'', "\\'")
    )
}

/// Convert a values-endpoint response into rows of string cells
pub(crate) fn values_to_rows(body: &Value) -> Vec<RosterRow> {
    let Some(values) = body.get("values").and_then(Value::as_array) else {
        return Vec::new();
    };

    values
        .iter()
        .map(|row| {
            let cells = row
                .as_array()
                .map(|cells| cells.iter().map(cell_to_string).collect())
                .unwrap_or_default();
            RosterRow::new(cells)
        })
        .collect()
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
