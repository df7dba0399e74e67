//! # Vigil Core
//!
//! GitHub Actions workflow status monitoring library.
//!
//! Polls the GitHub REST API for the latest run of every configured
//! workflow, strictly sequentially with a client-side throttle, and turns
//! the responses into a list of immutable result records. On top of the
//! records it renders a console summary, a pretty-printed JSON report, and
//! a static HTML dashboard.
//!
//! ## Example
//!
//! ```no_run
//! use vigil_core::{monitor_workflows, MonitorOptions, Summary};
//!
//! # async fn example() -> vigil_core::Result<()> {
//! let options = MonitorOptions {
//!     token: std::env::var("GITHUB_TOKEN").ok(),
//!     ..Default::default()
//! };
//!
//! let results = monitor_workflows("monitor-config.yml", options).await?;
//! let summary = Summary::from_results(&results);
//! println!("{} workflows checked, {} failing", summary.total, summary.failure);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod http;
pub mod monitor;
pub mod report;
pub mod types;

pub use config::{apply_defaults, load_config};
pub use error::{Error, ErrorKind, Result};
pub use monitor::{Monitor, MonitorOptions, DEFAULT_API_URL, DEFAULT_THROTTLE};
pub use report::{
    render_dashboard, render_text, ReportWriter, Summary, DASHBOARD_FILENAME, DATA_PLACEHOLDER,
    DEFAULT_TEMPLATE_PATH,
};
pub use types::{MonitorConfig, RepositorySpec, WorkflowRunResult, WorkflowSpec};

use std::path::Path;

/// Check every workflow named in a config file.
///
/// This is the main entry point for the library. It loads and defaults the
/// configuration, then runs the sequential monitor and returns the records
/// in config order. Per-workflow fetch failures never surface here; they
/// come back as `error` records. The error cases are a missing or
/// malformed config file.
///
/// # Example
///
/// ```no_run
/// use vigil_core::{monitor_workflows, MonitorOptions};
///
/// # async fn example() -> vigil_core::Result<()> {
/// let results = monitor_workflows("monitor-config.yml", MonitorOptions::default()).await?;
/// for record in &results {
///     println!("{}/{} {}: {:?}", record.owner, record.repo, record.workflow, record.conclusion);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn monitor_workflows(
    config_path: impl AsRef<Path>,
    options: MonitorOptions,
) -> Result<Vec<WorkflowRunResult>> {
    let config = load_config(config_path.as_ref())?;
    let monitor = Monitor::new(options);
    Ok(monitor.run(&config).await)
}

/// Synchronous variant of `monitor_workflows`
///
/// Spins up a fresh Tokio runtime per call, so it must not be called from
/// inside an existing runtime. Async callers use `monitor_workflows`.
pub fn monitor_workflows_sync(
    config_path: impl AsRef<Path>,
    options: MonitorOptions,
) -> Result<Vec<WorkflowRunResult>> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Error::Runtime(e.to_string()))?
        .block_on(monitor_workflows(config_path, options))
}
