//! Progress analysis for a single plan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::{MotivationLevel, Recommendation, Strength, Weakness};
use crate::planner::Plan;

/// Derived view of one plan's progress; recomputed on every call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// 0-100, rounded
    pub completion_rate: u32,
    pub is_on_track: bool,
    pub tasks_completed: usize,
    pub total_tasks: usize,
    pub days_elapsed: u32,
    /// Where the adoption curve says the plan should be, 0-100
    pub expected_progress: u32,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub recommendations: Vec<Recommendation>,
    pub motivation_level: MotivationLevel,
}

impl Analysis {
    /// Well-formed result for a plan without tasks
    pub fn empty() -> Self {
        Self {
            completion_rate: 0,
            is_on_track: false,
            tasks_completed: 0,
            total_tasks: 0,
            days_elapsed: 0,
            expected_progress: 0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            recommendations: vec![Recommendation::CreatePlan],
            motivation_level: MotivationLevel::Neutral,
        }
    }
}

/// `round(100 * completed / total)`, or 0 when there is nothing to complete
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer round-half-up
    let rate = (200 * completed as u64 + total as u64) / (2 * total as u64);
    u32::try_from(rate).unwrap_or(u32::MAX)
}

/// Assumed adoption curve: slow first week, near completion after four
pub fn expected_progress(days_elapsed: u32) -> u32 {
    match days_elapsed {
        0..=7 => 15,
        8..=14 => 30,
        15..=28 => 70,
        _ => 90,
    }
}

/// On track means at least 90% of the expected progress, compared on the
/// rounded rate the user sees
pub fn is_on_track(completion_rate: u32, expected_progress: u32) -> bool {
    completion_rate * 10 >= expected_progress * 9
}

/// Whole days since creation. A missing timestamp counts as "just now";
/// timestamps in the future clamp to zero.
pub fn days_elapsed(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    created_at
        .map(|created| (now - created).num_days().max(0))
        .and_then(|days| u32::try_from(days).ok())
        .unwrap_or(0)
}

/// Analyze a plan against its own recorded completion state
pub fn analyze_plan(plan: &Plan, now: DateTime<Utc>) -> Analysis {
    analyze_progress(plan, &plan.completed_task_ids, now)
}

/// Analyze a plan given a snapshot of completed task ids.
///
/// Only ids that belong to the plan's task list are counted, so
/// `tasks_completed <= total_tasks` always holds.
pub fn analyze_progress(plan: &Plan, completed: &BTreeSet<u32>, now: DateTime<Utc>) -> Analysis {
    let total_tasks = plan.tasks.len();
    if total_tasks == 0 {
        return Analysis::empty();
    }

    let tasks_completed = completed.iter().filter(|id| plan.has_task(**id)).count();
    if tasks_completed < completed.len() {
        debug!(
            "Plan {}: ignoring {} completed ids not in its task list",
            plan.id,
            completed.len() - tasks_completed
        );
    }

    let rate = completion_rate(tasks_completed, total_tasks);
    let days = days_elapsed(plan.created_at, now);
    let expected = expected_progress(days);
    let on_track = is_on_track(rate, expected);

    let mut strengths = Vec::new();
    let mut motivation_level = MotivationLevel::Neutral;

    if rate >= 80 {
        strengths.push(Strength::HighMotivation);
        motivation_level = MotivationLevel::High;
    } else if rate >= 60 {
        strengths.push(Strength::GoodMomentum);
        motivation_level = MotivationLevel::Good;
    } else if rate >= 30 {
        strengths.push(Strength::MakingProgress);
        motivation_level = MotivationLevel::Decent;
    }

    if on_track {
        strengths.push(Strength::OnSchedule);
    }

    if rate == 0 && days < 2 {
        strengths.push(Strength::JustStarted);
    }

    let mut weaknesses = Vec::new();

    if rate == 0 && days >= 7 {
        weaknesses.push(Weakness::StalledStart { days_elapsed: days });
    }

    if rate < 50 && days >= 14 {
        weaknesses.push(Weakness::SlowerThanExpected);
    }

    let behind = !on_track && rate > 0;
    if behind {
        weaknesses.push(Weakness::BehindCurve {
            completion_rate: rate,
            expected_progress: expected,
        });
    }

    let mut recommendations = recommendation_bucket(rate, days).to_vec();
    if behind {
        recommendations.push(Recommendation::RescopePlan);
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::KeepGoing);
    }

    Analysis {
        completion_rate: rate,
        is_on_track: on_track,
        tasks_completed,
        total_tasks,
        days_elapsed: days,
        expected_progress: expected,
        strengths,
        weaknesses,
        recommendations,
        motivation_level,
    }
}

/// First matching bucket wins
fn recommendation_bucket(rate: u32, days: u32) -> &'static [Recommendation] {
    use Recommendation::*;

    if rate == 0 && days >= 3 {
        &[StartWithOneTask, BreakIntoSmallerSteps]
    } else if rate < 30 && days >= 7 {
        &[FocusOnFewTasks, CheckOffDaily, AdjustDifficulty]
    } else if (30..70).contains(&rate) {
        &[MaintainPace, AddressOneWeakness, RewardYourself]
    } else if rate >= 70 {
        &[AlmostThere, PushToFinish, ConsiderNewGoal]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Frequency, Task};
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn plan(task_count: u32, days_ago: i64, completed: &[u32]) -> Plan {
        Plan {
            id: "plan-1".to_string(),
            goal: "Run a 10k".to_string(),
            category: "Health".to_string(),
            duration: "Short term (1-3 months)".to_string(),
            tasks: (1..=task_count)
                .map(|id| Task {
                    id,
                    title: format!("Task {}", id),
                    description: "d".to_string(),
                    frequency: Frequency::Daily,
                    estimated_days: 30,
                })
                .collect(),
            kpis: Vec::new(),
            tips: Vec::new(),
            created_at: Some(now() - Duration::days(days_ago)),
            completed_task_ids: completed.iter().copied().collect(),
        }
    }

    #[test]
    fn test_completion_rate_rounding() {
        assert_eq!(completion_rate(0, 8), 0);
        assert_eq!(completion_rate(1, 8), 13); // 12.5
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 7), 14);
        assert_eq!(completion_rate(5, 5), 100);
        assert_eq!(completion_rate(3, 0), 0);
    }

    #[test]
    fn test_completion_rate_bounds() {
        for total in 1..=40 {
            for completed in 0..=total {
                let rate = completion_rate(completed, total);
                assert!(rate <= 100);
                let exact = (100.0 * completed as f64 / total as f64).round() as u32;
                assert_eq!(rate, exact, "{}/{}", completed, total);
            }
        }
    }

    #[test]
    fn test_expected_progress_steps() {
        assert_eq!(expected_progress(0), 15);
        assert_eq!(expected_progress(7), 15);
        assert_eq!(expected_progress(8), 30);
        assert_eq!(expected_progress(14), 30);
        assert_eq!(expected_progress(15), 70);
        assert_eq!(expected_progress(28), 70);
        assert_eq!(expected_progress(29), 90);
    }

    #[test]
    fn test_on_track_tolerance_at_threshold() {
        // 0.9 * 15 = 13.5
        assert!(is_on_track(14, 15));
        assert!(!is_on_track(13, 15));
        assert!(is_on_track(27, 30));
        assert!(!is_on_track(26, 30));
    }

    #[test]
    fn test_on_track_boundary_through_analysis() {
        // 1 of 7 tasks = 14% at day 7
        let analysis = analyze_plan(&plan(7, 7, &[1]), now());
        assert_eq!(analysis.completion_rate, 14);
        assert_eq!(analysis.expected_progress, 15);
        assert!(analysis.is_on_track);

        // 1 of 8 tasks = 13% at day 7
        let analysis = analyze_plan(&plan(8, 7, &[1]), now());
        assert_eq!(analysis.completion_rate, 13);
        assert!(!analysis.is_on_track);
        assert!(analysis.weaknesses.contains(&Weakness::BehindCurve {
            completion_rate: 13,
            expected_progress: 15
        }));
        assert_eq!(
            analysis.recommendations,
            vec![
                Recommendation::FocusOnFewTasks,
                Recommendation::CheckOffDaily,
                Recommendation::AdjustDifficulty,
                Recommendation::RescopePlan,
            ]
        );
    }

    #[test]
    fn test_thresholds_use_rounded_rate() {
        // 4 of 15 is 26.67%, reported as 27; 27 clears 0.9 * 30
        let analysis = analyze_plan(&plan(15, 10, &[1, 2, 3, 4]), now());
        assert_eq!(analysis.completion_rate, 27);
        assert_eq!(analysis.expected_progress, 30);
        assert!(analysis.is_on_track);
        assert_eq!(analysis.strengths, vec![Strength::OnSchedule]);
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(
            analysis.recommendations,
            vec![
                Recommendation::FocusOnFewTasks,
                Recommendation::CheckOffDaily,
                Recommendation::AdjustDifficulty,
            ]
        );
    }

    #[test]
    fn test_stalled_plan_after_twenty_days() {
        let analysis = analyze_plan(&plan(8, 20, &[]), now());

        assert_eq!(analysis.completion_rate, 0);
        assert_eq!(analysis.days_elapsed, 20);
        assert_eq!(analysis.expected_progress, 70);
        assert!(!analysis.is_on_track);
        assert_eq!(
            analysis.weaknesses,
            vec![
                Weakness::StalledStart { days_elapsed: 20 },
                Weakness::SlowerThanExpected,
            ]
        );
        assert_eq!(
            analysis.weaknesses[0].to_string(),
            "No tasks completed yet after 20 days"
        );
        // rate == 0 && days >= 3 matches first, ahead of the < 30 bucket
        assert_eq!(
            analysis.recommendations,
            vec![
                Recommendation::StartWithOneTask,
                Recommendation::BreakIntoSmallerSteps,
            ]
        );
        assert!(analysis.strengths.is_empty());
        assert_eq!(analysis.motivation_level, MotivationLevel::Neutral);
    }

    #[test]
    fn test_fresh_plan_is_encouraged() {
        let analysis = analyze_plan(&plan(4, 0, &[]), now());
        assert_eq!(analysis.strengths, vec![Strength::JustStarted]);
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(analysis.recommendations, vec![Recommendation::KeepGoing]);
    }

    #[test]
    fn test_high_motivation_and_on_schedule() {
        let analysis = analyze_plan(&plan(5, 10, &[1, 2, 3, 4]), now());
        assert_eq!(analysis.completion_rate, 80);
        assert_eq!(analysis.motivation_level, MotivationLevel::High);
        assert_eq!(
            analysis.strengths,
            vec![Strength::HighMotivation, Strength::OnSchedule]
        );
        assert_eq!(
            analysis.recommendations,
            vec![
                Recommendation::AlmostThere,
                Recommendation::PushToFinish,
                Recommendation::ConsiderNewGoal,
            ]
        );
    }

    #[test]
    fn test_middle_bucket_behind_curve() {
        // 2 of 4 = 50% at day 20 (expected 70, needs 63)
        let analysis = analyze_plan(&plan(4, 20, &[1, 3]), now());
        assert_eq!(analysis.motivation_level, MotivationLevel::Decent);
        assert!(!analysis.is_on_track);
        assert_eq!(
            analysis.weaknesses,
            vec![Weakness::BehindCurve {
                completion_rate: 50,
                expected_progress: 70
            }]
        );
        assert_eq!(
            analysis.recommendations.last(),
            Some(&Recommendation::RescopePlan)
        );
        assert_eq!(analysis.recommendations.len(), 4);
    }

    #[test]
    fn test_stale_ids_are_not_counted() {
        let analysis = analyze_plan(&plan(4, 3, &[1, 2, 9, 10, 11]), now());
        assert_eq!(analysis.tasks_completed, 2);
        assert_eq!(analysis.completion_rate, 50);
    }

    #[test]
    fn test_external_snapshot_overrides_stored_ids() {
        let plan = plan(4, 3, &[]);
        let snapshot: BTreeSet<u32> = [1, 2, 3, 4].into_iter().collect();
        let analysis = analyze_progress(&plan, &snapshot, now());
        assert_eq!(analysis.completion_rate, 100);
    }

    #[test]
    fn test_missing_timestamp_counts_as_now() {
        let mut plan = plan(4, 30, &[]);
        plan.created_at = None;
        let analysis = analyze_plan(&plan, now());
        assert_eq!(analysis.days_elapsed, 0);
        assert_eq!(analysis.expected_progress, 15);
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        assert_eq!(days_elapsed(Some(now() + Duration::days(3)), now()), 0);
        assert_eq!(
            days_elapsed(Some(now() - Duration::hours(47)), now()),
            1
        );
    }

    #[test]
    fn test_zero_task_plan_is_degenerate() {
        let analysis = analyze_plan(&plan(0, 10, &[1]), now());
        assert_eq!(analysis, Analysis::empty());
        assert_eq!(
            analysis.recommendations[0].to_string(),
            "No plan found. Create one to get started!"
        );
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let plan = plan(6, 12, &[2, 5]);
        assert_eq!(analyze_plan(&plan, now()), analyze_plan(&plan, now()));
    }
}
