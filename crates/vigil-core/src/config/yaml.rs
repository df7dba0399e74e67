//! Restricted YAML-subset parser for monitor configuration
//!
//! This is not a general YAML parser. It recognizes exactly the line shapes
//! the config format uses (`owner:`, `repo:`, `workflows:`, `name:`,
//! `branch:`, `event:`), scanned top to bottom. Indentation carries no
//! structural meaning and every unrecognized line is silently ignored, so
//! parsing is total: any input produces a `MonitorConfig`.

use crate::types::{MonitorConfig, RepositorySpec, WorkflowSpec};

/// Position within the line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// No repository open
    Idle,
    /// A repository is open, outside its workflows block
    InRepo,
    /// Inside the open repository's workflows block
    InWorkflows,
}

/// Scan state threaded through the line fold.
#[derive(Debug)]
struct Accumulator {
    state: ParserState,
    owner: String,
    repo: String,
    workflows: Vec<WorkflowSpec>,
    repositories: Vec<RepositorySpec>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            state: ParserState::Idle,
            owner: String::new(),
            repo: String::new(),
            workflows: Vec::new(),
            repositories: Vec::new(),
        }
    }

    /// Consume one line and return the advanced accumulator.
    ///
    /// Line shapes are checked in priority order: `owner:`, `repo:`,
    /// `workflows:` (exact match), `name:`, then `branch:`/`event:`.
    /// The list-item marker `- ` is recognized on `owner:` and `name:` lines.
    fn step(mut self, line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return self;
        }
        let unmarked = match trimmed.strip_prefix("- ") {
            Some(rest) => rest.trim_start(),
            None => trimmed,
        };

        if let Some(value) = unmarked.strip_prefix("owner:") {
            self = self.flush();
            self.owner = scalar(value);
            self.state = ParserState::InRepo;
            return self;
        }
        if let Some(value) = trimmed.strip_prefix("repo:") {
            if self.state != ParserState::Idle {
                self.repo = scalar(value);
            }
            return self;
        }
        if trimmed == "workflows:" {
            if self.state != ParserState::Idle {
                self.state = ParserState::InWorkflows;
            }
            return self;
        }
        if let Some(value) = unmarked.strip_prefix("name:") {
            if self.state == ParserState::InWorkflows {
                self.workflows.push(WorkflowSpec::new(scalar(value)));
            }
            return self;
        }
        if let Some(value) = trimmed.strip_prefix("branch:") {
            if self.state == ParserState::InWorkflows {
                if let Some(last) = self.workflows.last_mut() {
                    last.branch = scalar(value);
                }
            }
            return self;
        }
        if let Some(value) = trimmed.strip_prefix("event:") {
            if self.state == ParserState::InWorkflows {
                if let Some(last) = self.workflows.last_mut() {
                    last.event = scalar(value);
                }
            }
            return self;
        }
        self
    }

    /// Close the open repository. It is kept only when it accumulated at
    /// least one workflow; otherwise it is discarded.
    fn flush(mut self) -> Self {
        if self.state != ParserState::Idle && !self.workflows.is_empty() {
            self.repositories.push(RepositorySpec {
                owner: std::mem::take(&mut self.owner),
                repo: std::mem::take(&mut self.repo),
                workflows: std::mem::take(&mut self.workflows),
            });
        } else {
            self.owner.clear();
            self.repo.clear();
            self.workflows.clear();
        }
        self.state = ParserState::Idle;
        self
    }

    fn finish(self) -> MonitorConfig {
        let closed = self.flush();
        MonitorConfig {
            repositories: closed.repositories,
        }
    }
}

/// Extract a scalar value: trim, then strip one matching pair of
/// surrounding quotes if present.
fn scalar(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// Parse the restricted YAML-subset grammar into a configuration.
///
/// Never fails: unrecognized lines are ignored and a repository only makes
/// it into the output once it has at least one workflow.
pub fn parse_yaml_subset(input: &str) -> MonitorConfig {
    input.lines().fold(Accumulator::new(), Accumulator::step).finish()
}
