//! HTML dashboard rendering by template substitution

use crate::error::{Error, Result};
use crate::types::WorkflowRunResult;
use std::path::Path;

/// Placeholder token replaced with the serialized result list
pub const DATA_PLACEHOLDER: &str = "DATA_PLACEHOLDER";

/// Default template location, relative to the working directory
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/dashboard.html";

/// Render the dashboard: substitute the JSON-serialized result list for the
/// first `DATA_PLACEHOLDER` occurrence in the template.
///
/// A missing or unreadable template is fatal and propagates to the caller;
/// a template without the placeholder passes through unchanged.
pub fn render_dashboard(results: &[WorkflowRunResult], template_path: &Path) -> Result<String> {
    let template = std::fs::read_to_string(template_path).map_err(|e| {
        Error::Template(format!(
            "failed to read template {}: {}",
            template_path.display(),
            e
        ))
    })?;

    let payload = serde_json::to_string(results)?;
    Ok(template.replacen(DATA_PLACEHOLDER, &payload, 1))
}
