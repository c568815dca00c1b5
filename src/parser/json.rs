use crate::error::ParseError;
use serde_json::{Map, Value};

/// Locate the JSON object in free-form model output: everything from the
/// first `{` through the last `}`. Surrounding prose and code fences are
/// discarded.
pub fn extract_json_object(s: &str) -> Option<&str> {
    let re = regex::Regex::new(r"\{[\s\S]*\}").ok()?;
    re.find(s).map(|m| m.as_str())
}

/// Extract and parse the object, then check the three required fields
pub fn parse_object(s: &str) -> Result<Map<String, Value>, ParseError> {
    let json_str = extract_json_object(s).ok_or(ParseError::NoJsonObject)?;

    let value: Value = serde_json::from_str(json_str)?;
    let Value::Object(object) = value else {
        return Err(ParseError::NotAnObject);
    };

    for field in ["tasks", "kpis", "tips"] {
        match object.get(field) {
            None => return Err(ParseError::MissingField(field)),
            Some(v) if is_falsy(v) => return Err(ParseError::MissingField(field)),
            Some(Value::Array(_)) => {}
            Some(_) => return Err(ParseError::NotAnArray(field)),
        }
    }

    Ok(object)
}

/// null, false, 0 and "" count as absent
fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
