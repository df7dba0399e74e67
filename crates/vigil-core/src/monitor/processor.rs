//! Run record normalization

use crate::error::ErrorKind;
use crate::http::{RunsApiClient, RunsResponse};
use crate::types::{
    WorkflowRunResult, WorkflowSpec, CONCLUSION_PENDING, STATUS_ERROR, STATUS_NO_RUNS,
};
use chrono::{SecondsFormat, Utc};

/// Process one (repository, workflow) pair into a result record.
///
/// Never fails: transport errors, unexpected statuses, and undecodable
/// bodies are all captured into the record as `status == "error"`.
pub async fn process(
    client: &RunsApiClient,
    owner: &str,
    repo: &str,
    spec: &WorkflowSpec,
) -> WorkflowRunResult {
    let result = base_record(owner, repo, spec);

    let branch = non_empty(&spec.branch);
    let event = non_empty(&spec.event);

    match client
        .latest_run(owner, repo, &spec.name, branch, event)
        .await
    {
        Ok(response) => apply_response(result, response),
        Err(e) => {
            // Remaining fetches share the same rate limit window
            if e.kind() == ErrorKind::RateLimit {
                eprintln!("Warning: {}", e);
            }
            apply_error(result, e.to_string())
        }
    }
}

/// Identity fields plus the fetch-initiation timestamp; outcome fields unset.
fn base_record(owner: &str, repo: &str, spec: &WorkflowSpec) -> WorkflowRunResult {
    WorkflowRunResult {
        owner: owner.to_string(),
        repo: repo.to_string(),
        workflow: spec.name.clone(),
        branch: spec.branch.clone(),
        event: spec.event.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        run_id: None,
        run_number: None,
        status: None,
        conclusion: None,
        run_started_at: None,
        html_url: None,
        head_sha: None,
        error: None,
    }
}

/// Fill outcome fields from a decoded API body.
///
/// Checked in order: a body carrying `message` is an API-reported error, an
/// empty or absent run list means the workflow has never run, otherwise the
/// first entry is the latest run and its fields are copied over.
fn apply_response(mut result: WorkflowRunResult, response: RunsResponse) -> WorkflowRunResult {
    if let Some(message) = response.message.filter(|m| !m.is_empty()) {
        result.status = Some(STATUS_ERROR.to_string());
        result.error = Some(message);
        return result;
    }

    let mut runs = response.workflow_runs.unwrap_or_default();
    if runs.is_empty() {
        result.status = Some(STATUS_NO_RUNS.to_string());
        return result;
    }

    let run = runs.remove(0);
    result.run_id = run.id.map(|id| id.to_string());
    result.run_number = run.run_number.map(|n| n.to_string());
    result.status = run.status;
    result.conclusion = Some(
        run.conclusion
            .unwrap_or_else(|| CONCLUSION_PENDING.to_string()),
    );
    result.run_started_at = run.run_started_at.or(run.created_at);
    result.html_url = run.html_url;
    result.head_sha = run.head_sha;
    result
}

/// Capture a fetch failure into the record.
fn apply_error(mut result: WorkflowRunResult, message: String) -> WorkflowRunResult {
    result.status = Some(STATUS_ERROR.to_string());
    result.error = Some(message);
    result
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
