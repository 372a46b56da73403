//! Model-reply cleanup and the deterministic fallback summary.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Fields, in preference order, used to headline an individual record.
const HEADLINE_FIELDS: &[&str] = &["name", "patient_name", "username", "title", "id"];

static LEAD_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(here's a|here is a|this is a).*?summary:?\s*").expect("lead-in regex")
});
static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^summary:?\s*").expect("label regex"));

/// Strip the boilerplate lead-ins the model tends to emit before the actual
/// summary ("Here's a brief summary:", "Summary:").
pub fn clean_response(raw: &str) -> String {
    let without_lead_in = LEAD_IN.replace(raw.trim(), "");
    LABEL.replace(&without_lead_in, "").trim().to_string()
}

/// Deterministic summary used when the narrative collaborator fails.
///
/// Recognizes the two payload shapes the collaborators return — an
/// authorization decision and a row set — and degrades to a field listing
/// for anything else.
pub fn fallback_summary(data: &Value) -> String {
    if let Some(authorized) = data.get("authorized").and_then(Value::as_bool) {
        return authorization_summary(data, authorized);
    }

    if let Some(rows) = data.get("data").and_then(Value::as_array) {
        return row_set_summary(data, rows);
    }

    match data {
        Value::Object(fields) => {
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            format!(
                "Data contains {} field{}: {}",
                names.len(),
                plural(names.len()),
                names.join(", ")
            )
        }
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn authorization_summary(data: &Value, authorized: bool) -> String {
    let status = if authorized { "Access Granted" } else { "Access Denied" };
    let resource = data
        .get("resource")
        .and_then(Value::as_str)
        .unwrap_or("resource");

    let mut narrative = format!("{status} for {resource}");
    if let Some(database) = data.get("database").and_then(Value::as_str) {
        narrative.push_str(&format!(" in {database}"));
    }
    if let Some(action) = data.get("action").and_then(Value::as_str) {
        narrative.push_str(&format!(" ({action} operation)"));
    }
    if let Some(reason) = data.get("reason").and_then(Value::as_str) {
        narrative.push_str(&format!("\n\nReason: {reason}"));
    }
    narrative
}

fn row_set_summary(data: &Value, rows: &[Value]) -> String {
    let count = rows.len();
    if count == 0 {
        return "No records found matching your query.".to_string();
    }

    let mut narrative = format!("Found {count} record{}", plural(count));
    if let Some(query) = data.get("query").and_then(Value::as_str) {
        narrative.push_str(&format!(" for query: \"{query}\""));
    }

    if let Some(first) = rows.first().and_then(Value::as_object) {
        let fields: Vec<&str> = first.keys().map(String::as_str).collect();
        narrative.push_str(&format!("\n\nData includes: {}", fields.join(", ")));
    }

    // Only small result sets get per-record headlines.
    if count <= 3 {
        narrative.push_str("\n\nDetails:");
        for (index, row) in rows.iter().enumerate() {
            let headline = HEADLINE_FIELDS
                .iter()
                .find_map(|field| row.get(field).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Record {}", index + 1));
            narrative.push_str(&format!("\n{}. {}", index + 1, headline));
        }
    }

    narrative
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
