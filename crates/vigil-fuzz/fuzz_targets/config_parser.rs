#![no_main]
use libfuzzer_sys::fuzz_target;
use vigil_core::config::yaml::parse_yaml_subset;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the restricted YAML grammar; it must accept any text
        let config = parse_yaml_subset(s);
        for repo in &config.repositories {
            // A repository without workflows never survives parsing
            assert!(!repo.workflows.is_empty());
        }
    }
});
