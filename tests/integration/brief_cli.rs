use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use crate::common::{fixture, run_docgate, stdout};

#[test]
fn complete_brief_exits_zero() {
    let output = run_docgate(&["brief", &fixture("brief_complete.md")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{text}");
    assert!(text.contains("COMPLETE: 100% complete"), "{text}");
    assert!(text.contains("  ✓  none found"));
    assert!(text.contains("Advisory warnings: 0"), "{text}");
    assert!(!text.contains("Action items:"));
}

#[test]
fn mostly_complete_brief_lists_gaps() {
    let output = run_docgate(&["brief", &fixture("brief_mostly_complete.md")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{text}");
    assert!(text.contains("Completeness:   81%"), "{text}");
    assert!(text.contains("MOSTLY_COMPLETE: 81% complete"));

    let items: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("    - "))
        .collect();
    assert_eq!(
        items,
        [
            "    - Risks: Add `## Risks` with the main risks and their mitigations.",
            "    - Timeline: Add `## Timeline` with milestones and target dates.",
            "    - {{OWNER}}",
        ]
    );
    assert!(text.contains("Reference template: templates/product-brief-template.md"));
}

#[test]
fn incomplete_brief_lists_only_wellformed_placeholders() {
    let output = run_docgate(&["brief", &fixture("brief_incomplete.md")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{text}");
    assert!(text.contains("INCOMPLETE: 27% complete"), "{text}");
    let placeholders: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("    - {{"))
        .collect();
    assert_eq!(placeholders, ["    - {{DUE_DATE}}", "    - {{PROJECT_NAME}}"]);
    assert!(text.contains("Placeholders:   2"));
}

#[test]
fn short_brief_warns_without_changing_verdict() {
    let output = run_docgate(&["brief", &fixture("brief_mostly_complete.md")]);
    let text = stdout(&output);
    assert!(text.contains("  ⚠ WARN  Document Length"), "{text}");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn config_file_changes_template_and_threshold() {
    let temp = tempdir().expect("can create temporary directory");
    let config = temp.path().join("docgate.toml");
    fs::write(
        &config,
        "[report]\nbrief_template = \"handbook/brief.md\"\n\n[brief]\nmin_lines = 10\n",
    )
    .expect("can write config");

    let output = run_docgate(&[
        "brief",
        &fixture("brief_mostly_complete.md"),
        "--config",
        config.to_string_lossy().as_ref(),
    ]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{text}");
    assert!(text.contains("Reference template: handbook/brief.md"), "{text}");
    assert!(text.contains("  ✓ PASS  Document Length  [42 lines]"), "{text}");
}

#[test]
fn empty_brief_is_reported_not_rejected() {
    let temp = tempdir().expect("can create temporary directory");
    let path = temp.path().join("empty.md");
    fs::write(&path, "").expect("can write document");

    let output = run_docgate(&["brief", path.to_string_lossy().as_ref()]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("INCOMPLETE: 0% complete"), "{text}");
}

#[test]
fn json_format_flattens_missing_sections() {
    let output = run_docgate(&[
        "brief",
        &fixture("brief_mostly_complete.md"),
        "--format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["verdict"], "MOSTLY_COMPLETE");
    assert_eq!(value["completeness"], 81);
    assert_eq!(value["missing_sections"], serde_json::json!(["Risks", "Timeline"]));
    assert_eq!(value["placeholders"], serde_json::json!(["{{OWNER}}"]));
    assert_eq!(value["tally"]["pass_rate"], 81);
    assert_eq!(value["checks"].as_array().map(Vec::len), Some(11));
    assert_eq!(value["checks"][9]["name"], "Risks");
    assert_eq!(value["checks"][9]["required"], true);
    assert!(value["checks"][9]["matched"].is_null());
}
