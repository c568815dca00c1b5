pub mod report;
pub mod summary;

pub use report::{render_analysis, render_plan};
pub use summary::{build_summary_markdown, write_summary};
