//! HTTP client for the workbench backend.
//!
//! The backend owns execution, formatting, linting, and file storage;
//! this module only speaks its JSON wire protocol. Endpoint error
//! payloads (`success: false` / `error` fields) are returned as parsed
//! responses, not as `Err` - the orchestrator decides how to surface
//! them. `Err` is reserved for transport failures and malformed bodies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base URL, matching the backend's development bind address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Error type for backend client operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request itself could not complete.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a body that is not the expected JSON.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    /// Non-2xx status without a parseable JSON body.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Response from `POST /api/run`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// Base64-encoded PNG payloads, in figure creation order.
    #[serde(default)]
    pub figures: Vec<String>,
}

/// Response from `GET /api/load`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub files: Vec<String>,
}

/// Response from `GET /api/load/<name>`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadResponse {
    pub success: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `POST /api/save`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Response from `POST /api/format`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A single lint finding, positions 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LintIssue {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub symbol: String,
}

/// Response from `POST /api/lint`.
#[derive(Debug, Clone, Deserialize)]
pub struct LintResponse {
    #[serde(default)]
    pub issues: Option<Vec<LintIssue>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CodeRequest<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    filename: &'a str,
    code: &'a str,
}

/// Client for the workbench backend API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL for the backend API
    pub base_url: String,
    /// Reusable HTTP client
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a new client with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Submit code for execution.
    pub async fn run(&self, code: &str) -> Result<RunResponse, BackendError> {
        let url = format!("{}/api/run", self.base_url);
        let response = self.client.post(&url).json(&CodeRequest { code }).send().await?;
        parse_json(response).await
    }

    /// Fetch the list of files stored on the backend.
    pub async fn list(&self) -> Result<ListResponse, BackendError> {
        let url = format!("{}/api/load", self.base_url);
        let response = self.client.get(&url).send().await?;
        parse_json(response).await
    }

    /// Load the content of a named file.
    pub async fn load(&self, name: &str) -> Result<LoadResponse, BackendError> {
        let url = format!("{}/api/load/{}", self.base_url, name);
        let response = self.client.get(&url).send().await?;
        parse_json(response).await
    }

    /// Save code under a name. The backend normalizes the extension.
    pub async fn save(&self, filename: &str, code: &str) -> Result<SaveResponse, BackendError> {
        let url = format!("{}/api/save", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SaveRequest { filename, code })
            .send()
            .await?;
        parse_json(response).await
    }

    /// Submit code for formatting.
    pub async fn format(&self, code: &str) -> Result<FormatResponse, BackendError> {
        let url = format!("{}/api/format", self.base_url);
        let response = self.client.post(&url).json(&CodeRequest { code }).send().await?;
        parse_json(response).await
    }

    /// Submit code for linting.
    pub async fn lint(&self, code: &str) -> Result<LintResponse, BackendError> {
        let url = format!("{}/api/lint", self.base_url);
        let response = self.client.post(&url).json(&CodeRequest { code }).send().await?;
        parse_json(response).await
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a response body as JSON.
///
/// The backend reports application-level failures with both an error
/// status and a JSON body, so the body is parsed regardless of status.
/// Only when the body is unusable does the status decide the error kind.
async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;
    match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(BackendError::Server {
            status: status.as_u16(),
            message: body_snippet(&body),
        }),
        Err(e) => Err(BackendError::Json(e)),
    }
}

/// Trim a response body down to something safe for a log line or toast.
fn body_snippet(body: &str) -> String {
    const MAX: usize = 120;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    let mut snippet: String = trimmed.chars().take(MAX).collect();
    if trimmed.chars().count() > MAX {
        snippet.push('…');
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = BackendClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_run_response_defaults() {
        let response: RunResponse = serde_json::from_str("{}").unwrap();
        assert!(response.stdout.is_empty());
        assert!(response.stderr.is_empty());
        assert!(response.figures.is_empty());
    }

    #[test]
    fn test_lint_response_parses_issues() {
        let response: LintResponse = serde_json::from_str(
            r#"{"issues":[{"line":3,"column":1,"message":"undefined variable 'x'","symbol":"undefined-variable"}]}"#,
        )
        .unwrap();
        let issues = response.issues.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[0].symbol, "undefined-variable");
    }

    #[test]
    fn test_load_response_error_shape() {
        let response: LoadResponse =
            serde_json::from_str(r#"{"success":false,"error":"File not found"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("File not found"));
        assert!(response.code.is_none());
    }

    #[test]
    fn test_body_snippet_truncates() {
        let long = "x".repeat(500);
        let snippet = body_snippet(&long);
        assert!(snippet.chars().count() <= 121);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn test_body_snippet_empty() {
        assert_eq!(body_snippet("   "), "empty response body");
    }
}
