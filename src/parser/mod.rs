mod json;
mod normalize;

use crate::error::ParseError;
use crate::planner::PlanPayload;
use serde_json::{Map, Value};

/// Parse model output into a fully populated plan payload.
///
/// Fails when no JSON object can be found, when it does not parse, or when
/// any of `tasks`, `kpis`, `tips` is absent.
pub fn parse_plan(raw: &str) -> Result<PlanPayload, ParseError> {
    let object = json::parse_object(raw)?;

    Ok(PlanPayload {
        tasks: normalize::normalize_tasks(array(&object, "tasks")),
        kpis: normalize::normalize_kpis(array(&object, "kpis")),
        tips: normalize::normalize_tips(array(&object, "tips")),
    })
}

fn array<'a>(object: &'a Map<String, Value>, field: &str) -> &'a [Value] {
    object
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
