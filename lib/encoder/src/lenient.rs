// Tolerant readers for loosely typed answers and attributes.
// Anything that cannot be read becomes `None` so the caller's default applies.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a number from a JSON number or a numeric string.
/// Non-finite values are rejected.
pub fn number(value: &Value) -> Option<f32> {
    let parsed = match value {
        Value::Number(n) => n.as_f64().map(|x| x as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite())
}

/// Read a categorical value. Numbers are rendered as text; null, booleans,
/// arrays and objects are treated as absent.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text))
}
