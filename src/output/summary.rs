use crate::analysis::OverallAnalysis;
use crate::error::OutputError;
use crate::planner::Plan;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::report::render_analysis;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    timestamp: String,
    #[serde(flatten)]
    overall: &'a OverallAnalysis,
}

/// Write summary.json and summary.md for an aggregate analysis
pub fn write_summary(
    report_dir: &Path,
    overall: &OverallAnalysis,
    plans: &[Plan],
    now: DateTime<Utc>,
) -> Result<(), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let summary = SummaryReport {
        timestamp: now.to_rfc3339(),
        overall,
    };

    let json_path = report_dir.join("summary.json");
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(&json_path, json).map_err(OutputError::WriteReport)?;

    let md_path = report_dir.join("summary.md");
    let md = build_summary_markdown(overall, plans, now);
    fs::write(&md_path, md).map_err(OutputError::WriteReport)?;

    Ok(())
}

pub fn build_summary_markdown(
    overall: &OverallAnalysis,
    plans: &[Plan],
    now: DateTime<Utc>,
) -> String {
    let mut md = String::new();

    md.push_str("# Growth Summary\n\n");
    md.push_str(&format!("**Generated:** {}\n", now.to_rfc3339()));
    md.push_str(&format!("**Status:** {}\n\n", overall.overall_status));

    md.push_str("| Plans | Active | Completed | Tasks done | Overall |\n");
    md.push_str("|-------|--------|-----------|------------|---------|\n");
    md.push_str(&format!(
        "| {} | {} | {} | {}/{} | {}% |\n\n",
        overall.total_plans,
        overall.active_plans,
        overall.completed_plans,
        overall.total_tasks_completed,
        overall.total_tasks,
        overall.overall_completion_rate
    ));

    for entry in &overall.plans {
        if let Some(plan) = plans.iter().find(|p| p.id == entry.plan_id) {
            md.push_str(&render_analysis(plan, &entry.analysis));
        }
    }

    md
}
