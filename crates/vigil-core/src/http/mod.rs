//! HTTP client for the GitHub API

pub mod runs;

pub use runs::{ApiWorkflowRun, RunsApiClient, RunsResponse};
