//! Backfill generated payloads so every task, kpi and tip is fully populated

use crate::planner::{Frequency, Kpi, Task};
use serde_json::Value;
use std::collections::HashSet;

const DEFAULT_DESCRIPTION: &str = "Complete this task";
const DEFAULT_ESTIMATED_DAYS: u32 = 30;
const DEFAULT_METRIC: &str = "Progress";
const DEFAULT_TARGET: &str = "Achieve goal";
const DEFAULT_TIP: &str = "Stay consistent";

pub fn normalize_tasks(values: &[Value]) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut next_free = 1u32;

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let position = u32::try_from(idx + 1).unwrap_or(u32::MAX);

            let mut id = positive_int(value.get("id")).unwrap_or(position);
            if seen.contains(&id) {
                while seen.contains(&next_free) {
                    next_free += 1;
                }
                id = next_free;
            }
            seen.insert(id);

            Task {
                id,
                title: non_empty_str(value.get("title"))
                    .unwrap_or_else(|| format!("Task {}", position)),
                description: non_empty_str(value.get("description"))
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                frequency: value
                    .get("frequency")
                    .and_then(Value::as_str)
                    .and_then(Frequency::from_tag)
                    .unwrap_or_default(),
                estimated_days: positive_int(value.get("estimatedDays"))
                    .unwrap_or(DEFAULT_ESTIMATED_DAYS),
            }
        })
        .collect()
}

pub fn normalize_kpis(values: &[Value]) -> Vec<Kpi> {
    values
        .iter()
        .map(|value| Kpi {
            metric: non_empty_str(value.get("metric"))
                .unwrap_or_else(|| DEFAULT_METRIC.to_string()),
            target: non_empty_str(value.get("target"))
                .unwrap_or_else(|| DEFAULT_TARGET.to_string()),
        })
        .collect()
}

pub fn normalize_tips(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| match value {
            Value::String(tip) => tip.clone(),
            _ => DEFAULT_TIP.to_string(),
        })
        .collect()
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Accepts positive integers and integer strings
fn positive_int(value: Option<&Value>) -> Option<u32> {
    let n = match value? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(n).ok().filter(|n| *n > 0)
}
