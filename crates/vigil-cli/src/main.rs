#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use std::path::{Path, PathBuf};
use vigil_core::{
    monitor_workflows, render_dashboard, render_text, MonitorOptions, ReportWriter, Summary,
    DEFAULT_TEMPLATE_PATH,
};

#[derive(Parser)]
#[command(name = "vigil", version, about = "GitHub Actions workflow status monitor")]
struct Cli {
    /// Path to the monitor configuration file (YAML subset or JSON)
    #[arg(long, env = "VIGIL_CONFIG", default_value = "./monitor-config.yml")]
    config: PathBuf,

    /// Path for the JSON results report (the dashboard lands next to it)
    #[arg(long, env = "VIGIL_OUTPUT", default_value = "./workflow-results.json")]
    output: PathBuf,

    /// GitHub token for authenticated API requests
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let code = run(cli, Path::new(DEFAULT_TEMPLATE_PATH));
    std::process::exit(code);
}

/// Treat empty strings as absent (an env var set to "" still parses as Some)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn run(cli: Cli, template: &Path) -> i32 {
    if !cli.config.exists() {
        eprintln!("Error: config file not found: {}", cli.config.display());
        return 1;
    }

    let token = clean_opt(&cli.token).map(String::from);
    if token.is_none() {
        eprintln!("Warning: no GitHub token provided, unauthenticated requests share a low rate limit");
    }

    let options = MonitorOptions {
        token,
        ..MonitorOptions::default()
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build();
    let rt = match rt {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return 1;
        }
    };

    let results = match rt.block_on(monitor_workflows(&cli.config, options)) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let summary = Summary::from_results(&results);
    print!("{}", render_text(&results));

    if let Err(e) = ReportWriter::write_results(&cli.output, &results) {
        eprintln!("Error: {e}");
        return 1;
    }
    eprintln!("Results written to {}", cli.output.display());

    let html = match render_dashboard(&results, template) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    match ReportWriter::write_dashboard(&cli.output, &html) {
        Ok(path) => eprintln!("Dashboard written to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    }

    if summary.has_failures() {
        1
    } else {
        0
    }
}
