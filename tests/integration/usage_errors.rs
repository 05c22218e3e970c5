use crate::common::{fixture, run_docgate, stderr, stdout};

#[test]
fn missing_path_is_a_usage_error() {
    let output = run_docgate(&["brief"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no report on usage errors");
    assert!(stderr(&output).contains("Usage"), "{}", stderr(&output));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = run_docgate(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_file_is_fatal() {
    let output = run_docgate(&["architecture", &fixture("no_such_document.md")]);
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no partial report");
    assert!(err.contains("Document not found"), "{err}");
    assert!(err.contains("Usage: docgate <architecture|brief> <PATH>"), "{err}");
}

#[test]
fn invalid_config_is_fatal() {
    let output = run_docgate(&[
        "brief",
        &fixture("brief_complete.md"),
        "--config",
        &fixture("config_zero_min_lines.toml"),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("brief.min_lines"));
}

#[test]
fn help_exits_zero() {
    let output = run_docgate(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("brief"));
}
