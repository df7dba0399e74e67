//! Monitor configuration loading

pub mod yaml;

use crate::error::{Error, Result};
use crate::types::{MonitorConfig, DEFAULT_BRANCH, DEFAULT_EVENT};
use std::path::Path;

/// Load a monitor configuration from a file.
///
/// Paths ending in `.yml`/`.yaml` go through the restricted subset grammar
/// ([`yaml::parse_yaml_subset`]); any other extension is parsed as JSON.
/// Both paths share the defaulting pass, and repositories without workflows
/// are dropped.
pub fn load_config(path: &Path) -> Result<MonitorConfig> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let mut config = if is_yaml_path(path) {
        yaml::parse_yaml_subset(&content)
    } else {
        serde_json::from_str(&content)?
    };

    apply_defaults(&mut config);
    config.repositories.retain(|repo| !repo.workflows.is_empty());
    Ok(config)
}

/// Fill `"main"`/`"schedule"` into every workflow spec missing a branch or
/// event filter. Idempotent: re-applying is a no-op.
pub fn apply_defaults(config: &mut MonitorConfig) {
    for repo in &mut config.repositories {
        for workflow in &mut repo.workflows {
            if workflow.branch.is_empty() {
                workflow.branch = DEFAULT_BRANCH.to_string();
            }
            if workflow.event.is_empty() {
                workflow.event = DEFAULT_EVENT.to_string();
            }
        }
    }
}

fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}
