//! Template-driven plan synthesis.
//!
//! Used as the offline path and as the fallback whenever external generation
//! fails. Total over any input: empty SWOT fields and unknown categories both
//! produce a complete payload.

use tracing::debug;

use super::templates::templates_for;
use super::{Category, Kpi, PlanPayload, SelfAssessment, Task};

const MAX_TIPS: usize = 4;

pub fn generate_plan(assessment: &SelfAssessment, goal: &str, category: &str) -> PlanPayload {
    let swot = assessment.items();
    let resolved = Category::resolve(category);
    if resolved.as_str() != category {
        debug!(
            "Category {:?} has no templates, using {} tasks",
            category, resolved
        );
    }

    let tasks = templates_for(resolved)
        .iter()
        .zip(1u32..)
        .map(|(t, id)| Task {
            id,
            title: t.title.to_string(),
            description: t.description.to_string(),
            frequency: t.frequency,
            estimated_days: t.estimated_days,
        })
        .collect();

    let kpis = vec![
        Kpi {
            metric: "Goal Achievement".to_string(),
            target: first(&swot.strengths)
                .map(|s| format!("Leverage: {}", s))
                .unwrap_or_else(|| "Complete main objective".to_string()),
        },
        Kpi {
            metric: "Challenge Management".to_string(),
            target: first(&swot.weaknesses)
                .map(|w| format!("Address: {}", w))
                .unwrap_or_else(|| "Overcome obstacles".to_string()),
        },
        Kpi {
            metric: "Opportunity Utilization".to_string(),
            target: first(&swot.opportunities)
                .map(|o| format!("Maximize: {}", o))
                .unwrap_or_else(|| "Seize advantages".to_string()),
        },
    ];

    let mut tips = vec![
        first(&swot.threats)
            .map(|t| format!("Mitigate risk of: {}", t))
            .unwrap_or_else(|| "Stay focused and committed".to_string()),
        first(&swot.strengths)
            .map(|s| format!("Build on your strength: {}", s))
            .unwrap_or_else(|| "Stay consistent".to_string()),
        format!("Break {} into weekly milestones for better tracking", goal),
        first(&swot.opportunities)
            .map(|o| format!("Take advantage of: {}", o))
            .unwrap_or_else(|| "Use available support".to_string()),
    ];
    tips.truncate(MAX_TIPS);

    PlanPayload { tasks, kpis, tips }
}

fn first(items: &[String]) -> Option<String> {
    items.first().cloned()
}
