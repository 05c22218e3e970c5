//! Human-readable, optionally colorized report text.

use colored::{ColoredString, Colorize};

use crate::{
    engine::{CheckResult, Outcome},
    validators::{ArchitectureReport, ArchitectureVerdict, BriefReport, BriefVerdict},
};

/// ANSI styling that can be switched off as a whole.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.bold().cyan())
    }

    fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    fn bad(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    fn caution(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn outcome(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Pass => self.good("✓ PASS"),
            Outcome::Fail => self.bad("✗ FAIL"),
            Outcome::Warn => self.caution("⚠ WARN"),
        }
    }
}

fn title(lines: &mut Vec<String>, palette: &Palette, text: &str) {
    lines.push(palette.heading(text));
    lines.push(palette.heading(&"=".repeat(text.chars().count())));
}

fn document_line(path: &std::path::Path, line_count: usize) -> String {
    format!("Document: {} ({line_count} lines)", path.display())
}

/// One line per check, with a category heading whenever the category changes.
fn push_checks(
    lines: &mut Vec<String>,
    palette: &Palette,
    checks: &[CheckResult],
    mark_optional: bool,
) {
    let mut current = None;
    for check in checks {
        if current != Some(check.rule.category) {
            current = Some(check.rule.category);
            lines.push(String::new());
            lines.push(palette.heading(check.rule.category));
        }
        let optional = if mark_optional && !check.rule.requirement.is_required() {
            " (optional)"
        } else {
            ""
        };
        let evidence = match &check.matched {
            Some(text) => format!("  {}", palette.dim(&format!("[{text}]"))),
            None => String::new(),
        };
        lines.push(format!(
            "  {}  {}{optional}{evidence}",
            palette.outcome(check.outcome),
            check.rule.name
        ));
    }
}

fn push_template(lines: &mut Vec<String>, template: &str) {
    lines.push(String::new());
    lines.push(format!("Reference template: {template}"));
}

pub fn render_architecture(
    report: &ArchitectureReport,
    palette: &Palette,
    template: &str,
) -> String {
    let mut lines = Vec::new();
    title(&mut lines, palette, "Architecture Validation");
    lines.push(document_line(&report.path, report.lines));

    push_checks(&mut lines, palette, &report.checks, true);

    lines.push(String::new());
    lines.push(palette.heading("Results"));
    lines.push(format!("  Passed:    {}", report.tally.pass));
    lines.push(format!("  Failed:    {}", report.tally.fail));
    lines.push(format!("  Warnings:  {}", report.tally.warn));
    lines.push(format!("  Pass rate: {}%", report.tally.pass_rate()));
    lines.push(String::new());

    match report.verdict {
        ArchitectureVerdict::Valid => {
            lines.push(palette.good("VALID: all required checks passed"));
            if report.tally.warn > 0 {
                lines.push(format!(
                    "Review {} optional gap(s) before hand-off (verdict unchanged):",
                    report.tally.warn
                ));
                for check in report.warnings() {
                    lines.push(format!("  - {}: {}", check.rule.name, check.rule.hint));
                }
            }
        }
        ArchitectureVerdict::Invalid => {
            lines.push(palette.bad(&format!(
                "INVALID: {} required check(s) failed",
                report.tally.fail
            )));
            lines.push("Fix the following before hand-off:".to_string());
            for check in report.failures() {
                lines.push(format!("  - {}: {}", check.rule.name, check.rule.hint));
            }
            push_template(&mut lines, template);
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

pub fn render_brief(report: &BriefReport, palette: &Palette, template: &str) -> String {
    let mut lines = Vec::new();
    title(&mut lines, palette, "Product Brief Validation");
    lines.push(document_line(&report.path, report.lines));

    push_checks(&mut lines, palette, &report.checks, false);

    lines.push(String::new());
    lines.push(palette.heading("Placeholders"));
    if report.placeholders.is_empty() {
        lines.push(format!("  {}  none found", palette.good("✓")));
    }
    for token in &report.placeholders {
        lines.push(format!("  {}  {token}", palette.bad("✗")));
    }

    lines.push(String::new());
    lines.push(palette.heading("Quality Advisories (do not affect the verdict)"));
    for advisory in &report.advisories {
        let detail = match (&advisory.matched, advisory.outcome) {
            (Some(text), _) => format!("  {}", palette.dim(&format!("[{text}]"))),
            (None, Outcome::Warn) => format!(": {}", advisory.rule.hint),
            (None, _) => String::new(),
        };
        lines.push(format!(
            "  {}  {}{detail}",
            palette.outcome(advisory.outcome),
            advisory.rule.name
        ));
    }

    lines.push(String::new());
    lines.push(palette.heading("Results"));
    lines.push(format!(
        "  Sections found: {}/{}",
        report.coverage.found, report.coverage.total
    ));
    lines.push(format!("  Completeness:   {}%", report.completeness));
    lines.push(format!("  Placeholders:   {}", report.placeholders.len()));
    lines.push(format!("  Advisory warnings: {}", report.advisory_warnings()));
    lines.push(String::new());

    let banner = format!("{}: {}% complete", report.verdict.as_str(), report.completeness);
    match report.verdict {
        BriefVerdict::Complete => lines.push(palette.good(&banner)),
        BriefVerdict::MostlyComplete => lines.push(palette.caution(&banner)),
        BriefVerdict::Incomplete => lines.push(palette.bad(&banner)),
    }

    if report.verdict != BriefVerdict::Complete {
        lines.push("Action items:".to_string());
        if !report.coverage.missing.is_empty() {
            lines.push("  Missing sections:".to_string());
            for check in report.checks.iter().filter(|c| !c.passed()) {
                lines.push(format!("    - {}: {}", check.rule.name, check.rule.hint));
            }
        }
        if !report.placeholders.is_empty() {
            lines.push("  Unresolved placeholders:".to_string());
            for token in &report.placeholders {
                lines.push(format!("    - {token}"));
            }
        }
        push_template(&mut lines, template);
    }

    lines.push(String::new());
    lines.join("\n")
}
