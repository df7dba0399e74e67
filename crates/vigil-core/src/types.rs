//! Configuration and result record types

use serde::{Deserialize, Serialize};

/// Branch filter applied to workflow specs that do not name one
pub const DEFAULT_BRANCH: &str = "main";

/// Trigger-event filter applied to workflow specs that do not name one
pub const DEFAULT_EVENT: &str = "schedule";

/// Synthetic status recorded when a workflow has no runs at all
pub const STATUS_NO_RUNS: &str = "no_runs_found";

/// Synthetic status recorded when the fetch for a workflow failed
pub const STATUS_ERROR: &str = "error";

/// API status of a run that is currently executing
pub const STATUS_IN_PROGRESS: &str = "in_progress";

/// Conclusion recorded when a run exists but has not concluded yet
pub const CONCLUSION_PENDING: &str = "n/a";

/// Conclusion of a successful run
pub const CONCLUSION_SUCCESS: &str = "success";

/// Conclusion of a failed run
pub const CONCLUSION_FAILURE: &str = "failure";

/// One workflow to monitor within a repository.
///
/// `branch` and `event` are stored as plain strings; an empty string means
/// "not set" until the loader's defaulting pass fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSpec {
    /// Workflow file identifier, unique within a repository (e.g. `ci.yml`)
    pub name: String,
    /// Branch the latest run is filtered to
    #[serde(default)]
    pub branch: String,
    /// Trigger event the latest run is filtered to
    #[serde(default)]
    pub event: String,
}

impl WorkflowSpec {
    /// Create a spec with the default branch and event filters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch: DEFAULT_BRANCH.to_string(),
            event: DEFAULT_EVENT.to_string(),
        }
    }
}

/// A repository and the workflows monitored inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySpec {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Monitored workflows, in config order
    #[serde(default)]
    pub workflows: Vec<WorkflowSpec>,
}

/// Root configuration: the ordered list of monitored repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Repositories in config order
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,
}

/// Outcome record for one (repository, workflow) pair.
///
/// Exactly one of three shapes applies: normal run fields populated,
/// `status == "no_runs_found"` with no run fields, or `status == "error"`
/// with `error` set. Records are immutable once built and are serialized
/// verbatim into the JSON report and the dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRunResult {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Workflow file identifier
    pub workflow: String,
    /// Branch filter the fetch used
    pub branch: String,
    /// Event filter the fetch used
    pub event: String,
    /// RFC 3339 instant the fetch was initiated
    pub timestamp: String,
    /// Run id, stringified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// Run number, stringified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_number: Option<String>,
    /// Run lifecycle status, or one of the two synthetic values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Run conclusion, `"n/a"` while a run has not concluded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    /// When the run started (falls back to its creation time)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_started_at: Option<String>,
    /// Web URL of the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Commit the run was triggered for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    /// Failure message, present only when `status == "error"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorkflowRunResult {
    /// Latest run concluded successfully.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.conclusion.as_deref() == Some(CONCLUSION_SUCCESS)
    }

    /// Latest run concluded with a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.conclusion.as_deref() == Some(CONCLUSION_FAILURE)
    }

    /// Latest run is still executing.
    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.status.as_deref() == Some(STATUS_IN_PROGRESS)
    }

    /// The fetch for this pair failed.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ERROR)
    }
}
