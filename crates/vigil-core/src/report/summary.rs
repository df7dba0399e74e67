//! Aggregate counts and the console status report

use crate::types::WorkflowRunResult;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Aggregate outcome counts over a result list.
///
/// The four category counts are not a partition of `total`: a record can
/// satisfy none of them (a run still `queued`, for instance), so their sum
/// need not equal `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of records
    pub total: usize,
    /// Records whose latest run concluded `success`
    pub success: usize,
    /// Records whose latest run concluded `failure`
    pub failure: usize,
    /// Records whose latest run is still executing
    pub in_progress: usize,
    /// Records whose fetch failed
    pub errors: usize,
}

impl Summary {
    /// Count outcomes over a result list.
    pub fn from_results(results: &[WorkflowRunResult]) -> Self {
        Self {
            total: results.len(),
            success: results.iter().filter(|r| r.is_success()).count(),
            failure: results.iter().filter(|r| r.is_failure()).count(),
            in_progress: results.iter().filter(|r| r.is_in_progress()).count(),
            errors: results.iter().filter(|r| r.is_error()).count(),
        }
    }

    /// At least one monitored workflow concluded with a failure.
    #[inline]
    pub fn has_failures(&self) -> bool {
        self.failure > 0
    }
}

/// Render the human-readable status report.
///
/// Fixed order: banner, aggregate counts, then the failed / in-progress /
/// successful / fetch-error sections. A section whose group is empty is
/// omitted entirely.
pub fn render_text(results: &[WorkflowRunResult]) -> String {
    render_at(results, Utc::now())
}

fn render_at(results: &[WorkflowRunResult], now: DateTime<Utc>) -> String {
    let summary = Summary::from_results(results);

    let mut out = String::new();
    let _ = writeln!(out, "Workflow Status Report");
    let _ = writeln!(out, "======================");
    let _ = writeln!(out, "Total workflows: {}", summary.total);
    let _ = writeln!(out, "  Success:     {}", summary.success);
    let _ = writeln!(out, "  Failure:     {}", summary.failure);
    let _ = writeln!(out, "  In progress: {}", summary.in_progress);
    let _ = writeln!(out, "  Errors:      {}", summary.errors);

    let failed: Vec<&WorkflowRunResult> = results.iter().filter(|r| r.is_failure()).collect();
    let in_progress: Vec<&WorkflowRunResult> =
        results.iter().filter(|r| r.is_in_progress()).collect();
    let successful: Vec<&WorkflowRunResult> = results.iter().filter(|r| r.is_success()).collect();
    let errored: Vec<&WorkflowRunResult> = results.iter().filter(|r| r.is_error()).collect();

    push_section(&mut out, "Failed Workflows", &failed, now);
    push_section(&mut out, "In-Progress Workflows", &in_progress, now);
    push_section(&mut out, "Successful Workflows", &successful, now);
    push_section(&mut out, "Fetch Errors", &errored, now);

    out
}

fn push_section(out: &mut String, title: &str, entries: &[&WorkflowRunResult], now: DateTime<Utc>) {
    if entries.is_empty() {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for record in entries {
        push_entry(out, record, now);
    }
}

fn push_entry(out: &mut String, record: &WorkflowRunResult, now: DateTime<Utc>) {
    let _ = writeln!(
        out,
        "  {}/{} {} [{} / {}]",
        record.owner, record.repo, record.workflow, record.branch, record.event
    );

    let mut parts: Vec<String> = Vec::new();
    if let Some(number) = &record.run_number {
        parts.push(format!("run #{}", number));
    }
    if let Some(started) = &record.run_started_at {
        if let Some((relative, absolute)) = format_times(started, now) {
            parts.push(format!("started {} ({})", relative, absolute));
        }
    }
    if !parts.is_empty() {
        let _ = writeln!(out, "    {}", parts.join(", "));
    }

    if let Some(url) = &record.html_url {
        let _ = writeln!(out, "    {}", url);
    }
    if let Some(error) = &record.error {
        let _ = writeln!(out, "    error: {}", error);
    }
}

/// Relative (`3h ago`) and absolute (`2026-08-25 06:00 UTC`) renderings of
/// an RFC 3339 timestamp, relative to `now`. `None` when the timestamp does
/// not parse.
pub fn format_times(timestamp: &str, now: DateTime<Utc>) -> Option<(String, String)> {
    let started = DateTime::parse_from_rfc3339(timestamp).ok()?.with_timezone(&Utc);
    let absolute = started.format("%Y-%m-%d %H:%M UTC").to_string();
    Some((relative_age(now - started), absolute))
}

/// Whole days, else whole hours, else whole minutes, else `just now`.
fn relative_age(delta: chrono::Duration) -> String {
    let days = delta.num_days();
    if days > 0 {
        return format!("{}d ago", days);
    }
    let hours = delta.num_hours();
    if hours > 0 {
        return format!("{}h ago", hours);
    }
    let minutes = delta.num_minutes();
    if minutes > 0 {
        return format!("{}m ago", minutes);
    }
    "just now".to_string()
}
