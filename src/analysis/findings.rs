//! Qualitative findings produced by the analyzers.
//!
//! Findings are data; `Display` renders the user-facing text.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strength {
    HighMotivation,
    GoodMomentum,
    MakingProgress,
    OnSchedule,
    JustStarted,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::HighMotivation => write!(f, "Excellent progress! You're doing amazing!"),
            Strength::GoodMomentum => write!(f, "Good momentum! Keep it up!"),
            Strength::MakingProgress => write!(f, "You're making progress!"),
            Strength::OnSchedule => write!(f, "You're right on schedule!"),
            Strength::JustStarted => write!(f, "Great! You just started. Let's get going!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Weakness {
    /// Nothing completed a week or more after creation
    StalledStart { days_elapsed: u32 },
    SlowerThanExpected,
    BehindCurve {
        completion_rate: u32,
        expected_progress: u32,
    },
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weakness::StalledStart { days_elapsed } => {
                write!(f, "No tasks completed yet after {} days", days_elapsed)
            }
            Weakness::SlowerThanExpected => write!(f, "Progress is slower than expected"),
            Weakness::BehindCurve {
                completion_rate,
                expected_progress,
            } => write!(
                f,
                "You're at {}% but should be at ~{}%",
                completion_rate, expected_progress
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    CreatePlan,
    StartWithOneTask,
    BreakIntoSmallerSteps,
    FocusOnFewTasks,
    CheckOffDaily,
    AdjustDifficulty,
    MaintainPace,
    AddressOneWeakness,
    RewardYourself,
    AlmostThere,
    PushToFinish,
    ConsiderNewGoal,
    RescopePlan,
    KeepGoing,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::CreatePlan => "No plan found. Create one to get started!",
            Recommendation::StartWithOneTask => "Start with just 1 task today. Don't overthink it!",
            Recommendation::BreakIntoSmallerSteps => "Break larger tasks into smaller steps",
            Recommendation::FocusOnFewTasks => "Pick 1-2 tasks to focus on this week",
            Recommendation::CheckOffDaily => "Check off tasks daily to build momentum",
            Recommendation::AdjustDifficulty => {
                "Consider if the tasks are too difficult - adjust them"
            }
            Recommendation::MaintainPace => "You're doing well! Maintain this pace",
            Recommendation::AddressOneWeakness => {
                "Pick one weakness from your plan and address it"
            }
            Recommendation::RewardYourself => "Reward yourself for completed tasks!",
            Recommendation::AlmostThere => "Fantastic progress! You're almost there!",
            Recommendation::PushToFinish => "Keep pushing to reach 100%",
            Recommendation::ConsiderNewGoal => {
                "After you complete this plan, consider a new goal!"
            }
            Recommendation::RescopePlan => "Consider creating a new plan with better-scoped tasks",
            Recommendation::KeepGoing => "Keep going! Small steps lead to big results.",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MotivationLevel {
    #[default]
    Neutral,
    Decent,
    Good,
    High,
}

impl fmt::Display for MotivationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotivationLevel::Neutral => write!(f, "neutral"),
            MotivationLevel::Decent => write!(f, "decent"),
            MotivationLevel::Good => write!(f, "good"),
            MotivationLevel::High => write!(f, "high"),
        }
    }
}

/// Headline for the aggregate view, keyed on the overall completion rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    NoPlans,
    GettingStarted,
    OnYourWay,
    GoodMomentum,
    Excellent,
}

impl OverallStatus {
    pub fn from_rate(overall_completion_rate: u32) -> Self {
        match overall_completion_rate {
            80.. => OverallStatus::Excellent,
            50..=79 => OverallStatus::GoodMomentum,
            20..=49 => OverallStatus::OnYourWay,
            _ => OverallStatus::GettingStarted,
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::NoPlans => write!(f, "No plans yet"),
            OverallStatus::GettingStarted => write!(f, "Getting started"),
            OverallStatus::OnYourWay => write!(f, "On your way!"),
            OverallStatus::GoodMomentum => write!(f, "Good momentum!"),
            OverallStatus::Excellent => write!(f, "Excellent progress!"),
        }
    }
}
