//! Report file writing

use crate::error::Result;
use crate::types::WorkflowRunResult;
use std::path::{Path, PathBuf};

/// File name of the HTML dashboard, placed next to the JSON report
pub const DASHBOARD_FILENAME: &str = "dashboard.html";

/// Writes the JSON report and the HTML dashboard.
pub struct ReportWriter;

impl ReportWriter {
    /// Write the pretty-printed result list to the JSON report file.
    pub fn write_results(output: &Path, results: &[WorkflowRunResult]) -> Result<()> {
        let content = serde_json::to_string_pretty(results)?;
        std::fs::write(output, content)?;
        Ok(())
    }

    /// Write rendered dashboard HTML next to the JSON report. Returns the
    /// path written to.
    pub fn write_dashboard(output: &Path, html: &str) -> Result<PathBuf> {
        let path = Self::dashboard_path(output);
        std::fs::write(&path, html)?;
        Ok(path)
    }

    /// Dashboard location: the JSON report's directory plus the fixed name.
    pub fn dashboard_path(output: &Path) -> PathBuf {
        output
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(DASHBOARD_FILENAME)
    }
}
