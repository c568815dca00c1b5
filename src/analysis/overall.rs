//! Aggregate progress across all of a user's plans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::progress::completion_rate;
use super::{analyze_plan, Analysis, OverallStatus};
use crate::planner::Plan;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAnalysis {
    pub plan_id: String,
    pub goal: String,
    pub category: String,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAnalysis {
    pub total_plans: usize,
    /// Plans below 100%, including plans without tasks
    pub active_plans: usize,
    pub completed_plans: usize,
    /// Task-weighted: summed completed over summed total, not a mean of plan rates
    pub overall_completion_rate: u32,
    pub total_tasks_completed: usize,
    pub total_tasks: usize,
    pub overall_status: OverallStatus,
    pub plans: Vec<PlanAnalysis>,
}

pub fn analyze_overall(plans: &[Plan], now: DateTime<Utc>) -> OverallAnalysis {
    let analyses: Vec<PlanAnalysis> = plans
        .iter()
        .map(|plan| PlanAnalysis {
            plan_id: plan.id.clone(),
            goal: plan.goal.clone(),
            category: plan.category.clone(),
            analysis: analyze_plan(plan, now),
        })
        .collect();

    let active_plans = analyses
        .iter()
        .filter(|p| p.analysis.completion_rate < 100)
        .count();
    let completed_plans = analyses
        .iter()
        .filter(|p| p.analysis.completion_rate == 100)
        .count();

    let total_tasks_completed: usize = analyses.iter().map(|p| p.analysis.tasks_completed).sum();
    let total_tasks: usize = analyses.iter().map(|p| p.analysis.total_tasks).sum();

    let overall_completion_rate = completion_rate(total_tasks_completed, total_tasks);
    let overall_status = if analyses.is_empty() {
        OverallStatus::NoPlans
    } else {
        OverallStatus::from_rate(overall_completion_rate)
    };

    OverallAnalysis {
        total_plans: analyses.len(),
        active_plans,
        completed_plans,
        overall_completion_rate,
        total_tasks_completed,
        total_tasks,
        overall_status,
        plans: analyses,
    }
}
