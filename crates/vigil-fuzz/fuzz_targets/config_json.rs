#![no_main]
use libfuzzer_sys::fuzz_target;
use vigil_core::{apply_defaults, MonitorConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the JSON config path plus the defaulting pass
        if let Ok(mut config) = serde_json::from_str::<MonitorConfig>(s) {
            apply_defaults(&mut config);
            for repo in &config.repositories {
                for workflow in &repo.workflows {
                    assert!(!workflow.branch.is_empty());
                    assert!(!workflow.event.is_empty());
                }
            }
        }
    }
});
