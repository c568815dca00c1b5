//! Types for SWOT input, generated plan payloads and stored plans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// The four-field self-assessment a plan is generated from.
///
/// Each field is free text that may list several items separated by commas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelfAssessment {
    #[serde(default)]
    pub strengths: String,

    #[serde(default)]
    pub weaknesses: String,

    #[serde(default)]
    pub opportunities: String,

    #[serde(default)]
    pub threats: String,
}

/// Comma-split, trimmed view of a [`SelfAssessment`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwotItems {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SelfAssessment {
    pub fn items(&self) -> SwotItems {
        SwotItems {
            strengths: split_items(&self.strengths),
            weaknesses: split_items(&self.weaknesses),
            opportunities: split_items(&self.opportunities),
            threats: split_items(&self.threats),
        }
    }
}

/// Split on commas, trim, and drop empty segments. Order is preserved.
pub fn split_items(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Goal categories with built-in task templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[default]
    Health,
    Career,
    Finance,
    Hobby,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Career,
        Category::Finance,
        Category::Hobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Career => "Career",
            Category::Finance => "Finance",
            Category::Hobby => "Hobby",
        }
    }

    /// Exact, case-sensitive lookup. Unknown labels resolve to the default.
    pub fn resolve(label: &str) -> Category {
        label.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// How often a task is meant to be repeated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Lenient parse used for generated payloads
    pub fn from_tag(tag: &str) -> Option<Frequency> {
        match tag.trim().to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Positive, unique within a plan
    pub id: u32,
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
    pub estimated_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Kpi {
    pub metric: String,
    pub target: String,
}

/// Generated content of a plan, before metadata is attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanPayload {
    pub tasks: Vec<Task>,
    pub kpis: Vec<Kpi>,
    pub tips: Vec<String>,
}

/// A stored plan: generated payload plus metadata and completion state
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub goal: String,
    pub category: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "completedTasks")]
    pub completed_task_ids: BTreeSet<u32>,
}

impl Plan {
    /// Attach metadata to a freshly generated payload. The plan starts with
    /// nothing completed.
    pub fn from_payload(
        payload: PlanPayload,
        goal: &str,
        category: &str,
        duration: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal: goal.to_string(),
            category: category.to_string(),
            duration: duration.to_string(),
            tasks: payload.tasks,
            kpis: payload.kpis,
            tips: payload.tips,
            created_at: Some(created_at),
            completed_task_ids: BTreeSet::new(),
        }
    }

    pub fn has_task(&self, task_id: u32) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }
}
