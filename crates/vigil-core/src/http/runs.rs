//! GitHub Actions "list workflow runs" API client

use crate::error::{Error, Result};
use serde::Deserialize;

/// User-Agent sent with every API request
pub const USER_AGENT: &str = "vigil/0.1.0";

/// GitHub API response for the workflow runs list.
///
/// Every field is optional on purpose: an error body (`message` set) and a
/// success body (`workflow_runs` set) have different shapes, and
/// normalization needs to see which one arrived.
#[derive(Debug, Clone, Deserialize)]
pub struct RunsResponse {
    /// Error description; the API's convention for reporting failures in the body
    pub message: Option<String>,
    /// Total number of runs matching the query
    pub total_count: Option<u64>,
    /// Matching runs, most recent first
    pub workflow_runs: Option<Vec<ApiWorkflowRun>>,
}

/// One workflow run as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWorkflowRun {
    /// Run id
    pub id: Option<u64>,
    /// Sequential run number within the workflow
    pub run_number: Option<u64>,
    /// Lifecycle status (`queued`, `in_progress`, `completed`)
    pub status: Option<String>,
    /// Terminal outcome, null while the run is unfinished
    pub conclusion: Option<String>,
    /// When the run started executing
    pub run_started_at: Option<String>,
    /// When the run was created
    pub created_at: Option<String>,
    /// Web URL of the run
    pub html_url: Option<String>,
    /// Commit the run was triggered for
    pub head_sha: Option<String>,
}

/// GitHub Actions workflow runs API client
pub struct RunsApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for RunsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunsApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl RunsApiClient {
    /// Create a new runs API client.
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url,
            token,
        }
    }

    /// Fetch the most recent run of one workflow.
    ///
    /// Endpoint: GET /repos/{owner}/{repo}/actions/workflows/{workflow}/runs
    /// Query params: per_page=1, then optional event, then optional branch
    /// (order fixed).
    pub async fn latest_run(
        &self,
        owner: &str,
        repo: &str,
        workflow: &str,
        branch: Option<&str>,
        event: Option<&str>,
    ) -> Result<RunsResponse> {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/runs",
            self.base_url, owner, repo, workflow
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("per_page", "1")]);

        if let Some(event) = event {
            request = request.query(&[("event", event)]);
        }

        if let Some(branch) = branch {
            request = request.query(&[("branch", branch)]);
        }

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Failed to fetch workflow runs: {}", e)))?;

        let status = response.status();

        // Primary quota exhaustion is a 403 with a zeroed remaining count;
        // secondary limits come back as 429. A bare 403 is a permission
        // problem, not rate limiting.
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && quota_exhausted(response.headers()))
        {
            return Err(Error::RateLimit(rate_limit_hint(response.headers())));
        }

        if !status.is_success() {
            return Err(Error::Api(format!("unexpected status {}", status)));
        }

        response
            .json::<RunsResponse>()
            .await
            .map_err(|e| Error::Api(format!("Failed to decode workflow runs response: {}", e)))
    }
}

fn header_str<'a>(headers: &'a reqwest::header::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn quota_exhausted(headers: &reqwest::header::HeaderMap) -> bool {
    header_str(headers, "x-ratelimit-remaining") == Some("0")
}

fn rate_limit_hint(headers: &reqwest::header::HeaderMap) -> String {
    match header_str(headers, "x-ratelimit-reset") {
        Some(epoch) => format!(
            "quota resets at unix time {}, set GITHUB_TOKEN for a higher limit",
            epoch
        ),
        None => "set GITHUB_TOKEN for a higher limit".to_string(),
    }
}
