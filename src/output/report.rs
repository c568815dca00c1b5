use crate::analysis::Analysis;
use crate::planner::{Plan, PlanPayload};

/// Markdown view of a generated plan
pub fn render_plan(goal: &str, payload: &PlanPayload) -> String {
    let mut content = String::new();

    content.push_str(&format!("# Your Personal Plan\n\n**Goal:** {}\n\n", goal));

    content.push_str("## Action Tasks\n\n");
    for task in &payload.tasks {
        content.push_str(&format!(
            "{}. **{}** - {} ({}, ~{} days)\n",
            task.id, task.title, task.description, task.frequency, task.estimated_days
        ));
    }

    content.push_str("\n## Success Metrics\n\n");
    content.push_str("| Metric | Target |\n");
    content.push_str("|--------|--------|\n");
    for kpi in &payload.kpis {
        content.push_str(&format!("| {} | {} |\n", kpi.metric, kpi.target));
    }

    content.push_str("\n## Tips\n\n");
    for tip in &payload.tips {
        content.push_str(&format!("- {}\n", tip));
    }

    content
}

/// Markdown section for one plan's analysis
pub fn render_analysis(plan: &Plan, analysis: &Analysis) -> String {
    let mut content = String::new();

    content.push_str(&format!("## {} ({})\n\n", plan.goal, plan.category));
    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    content.push_str(&format!(
        "| Completed | {}/{} ({}%) |\n",
        analysis.tasks_completed, analysis.total_tasks, analysis.completion_rate
    ));
    content.push_str(&format!("| Days elapsed | {} |\n", analysis.days_elapsed));
    content.push_str(&format!(
        "| Expected progress | {}% |\n",
        analysis.expected_progress
    ));
    content.push_str(&format!(
        "| On track | {} |\n",
        if analysis.is_on_track { "yes" } else { "no" }
    ));
    content.push_str(&format!("| Motivation | {} |\n\n", analysis.motivation_level));

    push_list(&mut content, "Strengths", &analysis.strengths);
    push_list(&mut content, "Needs attention", &analysis.weaknesses);
    push_list(&mut content, "Recommendations", &analysis.recommendations);

    content
}

fn push_list<T: std::fmt::Display>(content: &mut String, heading: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    content.push_str(&format!("### {}\n\n", heading));
    for item in items {
        content.push_str(&format!("- {}\n", item));
    }
    content.push('\n');
}
