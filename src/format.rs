use anyhow::Result;
use serde_json::Value;

/// JSON with two-space indentation.
pub fn pretty_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders one timestamp entry as a single output line.
pub fn timestamp_line(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn timestamp_lines(entries: &[Value]) -> Vec<String> {
    entries.iter().map(timestamp_line).collect()
}
