//! Property-based tests using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use vigil_core::config::apply_defaults;
use vigil_core::config::yaml::parse_yaml_subset;
use vigil_core::report::summary::format_times;
use vigil_core::report::{render_text, Summary};
use vigil_core::types::{
    MonitorConfig, RepositorySpec, WorkflowRunResult, WorkflowSpec, DEFAULT_BRANCH, DEFAULT_EVENT,
};

// Generate plausible workflow file names
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,15}\\.yml").expect("valid regex")
}

// Generate identifiers for owners, repos, branches, events
fn arb_ident() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,12}").expect("valid regex")
}

#[derive(Debug, Clone)]
struct GenWorkflow {
    name: String,
    branch: Option<String>,
    event: Option<String>,
}

fn arb_workflow() -> impl Strategy<Value = GenWorkflow> {
    (
        arb_name(),
        prop::option::of(arb_ident()),
        prop::option::of(arb_ident()),
    )
        .prop_map(|(name, branch, event)| GenWorkflow {
            name,
            branch,
            event,
        })
}

fn arb_repos() -> impl Strategy<Value = Vec<(String, String, Vec<GenWorkflow>)>> {
    prop::collection::vec(
        (
            arb_ident(),
            arb_ident(),
            prop::collection::vec(arb_workflow(), 1..4),
        ),
        1..4,
    )
}

/// Render generated repos as a config document in the subset grammar.
fn render_yaml(repos: &[(String, String, Vec<GenWorkflow>)]) -> String {
    let mut out = String::from("repositories:\n");
    for (owner, repo, workflows) in repos {
        out.push_str(&format!("- owner: {}\n  repo: {}\n  workflows:\n", owner, repo));
        for workflow in workflows {
            out.push_str(&format!("    - name: {}\n", workflow.name));
            if let Some(branch) = &workflow.branch {
                out.push_str(&format!("      branch: {}\n", branch));
            }
            if let Some(event) = &workflow.event {
                out.push_str(&format!("      event: {}\n", event));
            }
        }
    }
    out
}

fn record_with(status: Option<String>, conclusion: Option<String>) -> WorkflowRunResult {
    WorkflowRunResult {
        owner: "octo".into(),
        repo: "widgets".into(),
        workflow: "build.yml".into(),
        branch: "main".into(),
        event: "schedule".into(),
        timestamp: "2026-08-25T12:00:00Z".into(),
        run_id: None,
        run_number: None,
        status,
        conclusion,
        run_started_at: None,
        html_url: None,
        head_sha: None,
        error: None,
    }
}

fn arb_record() -> impl Strategy<Value = WorkflowRunResult> {
    let status = prop::option::of(prop_oneof![
        Just("completed".to_string()),
        Just("in_progress".to_string()),
        Just("queued".to_string()),
        Just("error".to_string()),
        Just("no_runs_found".to_string()),
    ]);
    let conclusion = prop::option::of(prop_oneof![
        Just("success".to_string()),
        Just("failure".to_string()),
        Just("cancelled".to_string()),
        Just("n/a".to_string()),
    ]);
    (status, conclusion).prop_map(|(status, conclusion)| record_with(status, conclusion))
}

proptest! {
    #[test]
    fn test_parser_is_total(input in "\\PC{0,400}") {
        // Arbitrary text never panics and never yields an empty repository
        let config = parse_yaml_subset(&input);
        for repo in &config.repositories {
            prop_assert!(!repo.workflows.is_empty());
        }
    }

    #[test]
    fn test_wellformed_yaml_round_trips(repos in arb_repos()) {
        let config = parse_yaml_subset(&render_yaml(&repos));

        prop_assert_eq!(config.repositories.len(), repos.len());
        for (parsed, (owner, repo, workflows)) in config.repositories.iter().zip(&repos) {
            prop_assert_eq!(&parsed.owner, owner);
            prop_assert_eq!(&parsed.repo, repo);
            prop_assert_eq!(parsed.workflows.len(), workflows.len());
            for (got, want) in parsed.workflows.iter().zip(workflows) {
                let want_branch = want.branch.as_deref().unwrap_or(DEFAULT_BRANCH);
                let want_event = want.event.as_deref().unwrap_or(DEFAULT_EVENT);
                prop_assert_eq!(&got.name, &want.name);
                prop_assert_eq!(got.branch.as_str(), want_branch);
                prop_assert_eq!(got.event.as_str(), want_event);
            }
        }
    }

    #[test]
    fn test_defaulting_is_idempotent_and_complete(repos in arb_repos()) {
        let mut config = MonitorConfig {
            repositories: repos
                .iter()
                .map(|(owner, repo, workflows)| RepositorySpec {
                    owner: owner.clone(),
                    repo: repo.clone(),
                    workflows: workflows
                        .iter()
                        .map(|w| WorkflowSpec {
                            name: w.name.clone(),
                            branch: w.branch.clone().unwrap_or_default(),
                            event: w.event.clone().unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        };

        apply_defaults(&mut config);
        for repo in &config.repositories {
            for workflow in &repo.workflows {
                prop_assert!(!workflow.branch.is_empty());
                prop_assert!(!workflow.event.is_empty());
            }
        }

        let once = config.clone();
        apply_defaults(&mut config);
        prop_assert_eq!(config, once);
    }

    #[test]
    fn test_config_json_round_trip(repos in arb_repos()) {
        let config = MonitorConfig {
            repositories: repos
                .iter()
                .map(|(owner, repo, workflows)| RepositorySpec {
                    owner: owner.clone(),
                    repo: repo.clone(),
                    workflows: workflows
                        .iter()
                        .map(|w| WorkflowSpec {
                            name: w.name.clone(),
                            branch: w.branch.clone().unwrap_or_default(),
                            event: w.event.clone().unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        };

        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: MonitorConfig = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn test_summary_counts_are_bounded(records in prop::collection::vec(arb_record(), 0..40)) {
        let summary = Summary::from_results(&records);
        prop_assert_eq!(summary.total, records.len());
        prop_assert!(summary.success <= summary.total);
        prop_assert!(summary.failure <= summary.total);
        prop_assert!(summary.in_progress <= summary.total);
        prop_assert!(summary.errors <= summary.total);
        prop_assert_eq!(summary.has_failures(), summary.failure > 0);
    }

    #[test]
    fn test_render_text_reflects_groups(records in prop::collection::vec(arb_record(), 0..40)) {
        let summary = Summary::from_results(&records);
        let text = render_text(&records);

        let expected_total = format!("Total workflows: {}", summary.total);
        prop_assert!(text.contains(&expected_total));
        prop_assert_eq!(text.contains("Failed Workflows:"), summary.failure > 0);
        prop_assert_eq!(text.contains("In-Progress Workflows:"), summary.in_progress > 0);
        prop_assert_eq!(text.contains("Successful Workflows:"), summary.success > 0);
        prop_assert_eq!(text.contains("Fetch Errors:"), summary.errors > 0);
    }

    #[test]
    fn test_time_formatting_is_total(garbage in "\\PC{0,40}") {
        // Unparseable timestamps must come back as None, never a panic
        let _ = format_times(&garbage, Utc::now());
    }

    #[test]
    fn test_valid_timestamps_always_format(secs in 0i64..4_102_444_800) {
        let started = Utc.timestamp_opt(secs, 0).unwrap();
        let formatted = format_times(&started.to_rfc3339(), Utc::now());
        prop_assert!(formatted.is_some());
    }
}

mod aggregate_behavior {
    use super::*;

    #[test]
    fn test_large_result_list_renders() {
        let mut records = Vec::new();
        for i in 0..1000 {
            let conclusion = if i % 3 == 0 { "success" } else { "failure" };
            records.push(record_with(
                Some("completed".into()),
                Some(conclusion.into()),
            ));
        }

        let summary = Summary::from_results(&records);
        assert_eq!(summary.total, 1000);
        assert_eq!(summary.success + summary.failure, 1000);

        let text = render_text(&records);
        assert!(text.contains("Total workflows: 1000"));
    }

    #[test]
    fn test_all_outcomes_coexist() {
        let records = vec![
            record_with(Some("completed".into()), Some("success".into())),
            record_with(Some("completed".into()), Some("failure".into())),
            record_with(Some("in_progress".into()), Some("n/a".into())),
            record_with(Some("queued".into()), Some("n/a".into())),
            record_with(Some("error".into()), None),
            record_with(Some("no_runs_found".into()), None),
        ];

        let summary = Summary::from_results(&records);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.errors, 1);
    }
}
