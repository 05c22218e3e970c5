use anyhow::{Context, Result};
use serde_json::{json, Value};

use super::Report;

/// Serialize the report with the verdict's exit code and template pointer attached.
pub fn render_json(report: &Report, template: &str) -> Result<String> {
    let body = match report {
        Report::Architecture(report) => serde_json::to_value(report),
        Report::Brief(report) => serde_json::to_value(report),
    }
    .context("failed to serialize report")?;

    let mut payload = json!({
        "validator": report.validator(),
        "exit_code": report.exit_code(),
    });
    if let (Value::Object(target), Value::Object(fields)) = (&mut payload, body) {
        target.extend(fields);
        if report.exit_code() != 0 {
            target.insert("template".into(), Value::String(template.to_string()));
        }
    }

    let mut rendered = serde_json::to_string_pretty(&payload)?;
    rendered.push('\n');
    Ok(rendered)
}
