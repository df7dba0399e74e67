//! Sequential monitoring pipeline

pub mod processor;

use crate::http::RunsApiClient;
use crate::types::{MonitorConfig, WorkflowRunResult};
use std::time::Duration;

/// Default GitHub API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default pause inserted after each API call
pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(1);

/// Tuning for a monitoring run.
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    /// Bearer token for the API; requests go unauthenticated when absent
    pub token: Option<String>,
    /// API base URL override; falls back to `GITHUB_API_URL`, then the public API
    pub api_url: Option<String>,
    /// Client-side throttle between successive fetches
    pub throttle: Duration,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            token: None,
            api_url: None,
            throttle: DEFAULT_THROTTLE,
        }
    }
}

/// Sequential workflow monitor.
pub struct Monitor {
    client: RunsApiClient,
    throttle: Duration,
}

impl Monitor {
    /// Create a monitor, resolving the API base URL from the options.
    pub fn new(options: MonitorOptions) -> Self {
        Self {
            client: RunsApiClient::new(resolve_base_url(options.api_url), options.token),
            throttle: options.throttle,
        }
    }

    /// Check every configured workflow, strictly sequentially.
    ///
    /// Records come back in config order: repositories outer, workflows
    /// inner. The loop pauses for the throttle delay after every fetch, and
    /// a failed fetch becomes an `error` record without stopping the run.
    pub async fn run(&self, config: &MonitorConfig) -> Vec<WorkflowRunResult> {
        let total: usize = config.repositories.iter().map(|r| r.workflows.len()).sum();
        let mut results = Vec::with_capacity(total);

        for repo in &config.repositories {
            for workflow in &repo.workflows {
                eprintln!(
                    "Checking {}/{} {} ({} / {})",
                    repo.owner, repo.repo, workflow.name, workflow.branch, workflow.event
                );

                let record =
                    processor::process(&self.client, &repo.owner, &repo.repo, workflow).await;
                results.push(record);

                tokio::time::sleep(self.throttle).await;
            }
        }

        results
    }
}

/// Pick the API base URL: explicit option, then `GITHUB_API_URL`, then the
/// public endpoint. A trailing slash is dropped so URL assembly stays clean.
fn resolve_base_url(api_url: Option<String>) -> String {
    let base = api_url
        .or_else(|| std::env::var("GITHUB_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    base.trim_end_matches('/').to_string()
}
