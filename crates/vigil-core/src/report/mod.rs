//! Report generation: console summary, JSON file, HTML dashboard

pub mod dashboard;
pub mod summary;
pub mod writer;

pub use dashboard::{render_dashboard, DATA_PLACEHOLDER, DEFAULT_TEMPLATE_PATH};
pub use summary::{render_text, Summary};
pub use writer::{ReportWriter, DASHBOARD_FILENAME};
