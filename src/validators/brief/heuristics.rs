//! Advisory quality checks. They are reported but never change the verdict.

use crate::{
    engine::{scan, CheckResult, Registry, Requirement, RuleInfo, RuleSpec},
    lib::{document::Document, errors::RuleError},
};

pub const ADVISORY_CATALOG: &str = "brief-advisories";
pub const ADVISORY_CATEGORY: &str = "Quality Advisories";

const LENGTH_RULE: RuleInfo = RuleInfo {
    category: ADVISORY_CATEGORY,
    name: "Document Length",
    requirement: Requirement::Optional,
    hint: "Expand the brief to at least the recommended length.",
};

fn keyword_catalog() -> Vec<RuleSpec> {
    vec![
        RuleSpec::optional(ADVISORY_CATEGORY, "Quantified Metrics")
            .matching([
                r"\b\d+(?:\.\d+)?\s*%",
                r"\b\d+\s*users\b",
                r"\b\d+\s*(?:ms|milliseconds?|seconds?|minutes?|hours?|days?|weeks?|months?|years?)\b",
            ])
            .hint("Quantify success: percentages, user counts or time targets."),
        RuleSpec::optional(ADVISORY_CATEGORY, "Timeline Markers")
            .matching([
                r"\bQ[1-4]\s*\d{4}\b",
                r"\b\d{4}-\d{2}-\d{2}\b",
                r"\btimeline\b",
                r"\bdeadline\b",
                r"\blaunch",
            ])
            .hint("Anchor the plan in time: a quarter, a date or a launch milestone."),
        RuleSpec::optional(ADVISORY_CATEGORY, "Stakeholder Input")
            .matching([
                "stakeholder",
                r"\binterview",
                r"\bconsult",
                r"\bsurvey",
                "user research",
            ])
            .hint("Note which stakeholders or users were consulted."),
        RuleSpec::optional(ADVISORY_CATEGORY, "Risk Awareness")
            .matching([r"\brisks?\b", "mitigat", "assumption"])
            .hint("Call out risks, mitigations and assumptions."),
    ]
}

/// Length threshold plus keyword advisories.
#[derive(Debug, Clone)]
pub struct Advisories {
    min_lines: usize,
    registry: Registry,
}

impl Advisories {
    pub fn new(min_lines: usize) -> Result<Self, RuleError> {
        Ok(Self {
            min_lines,
            registry: Registry::compile(ADVISORY_CATALOG, keyword_catalog())?,
        })
    }

    /// One result per advisory, length first. Misses are always `Warn`.
    pub fn evaluate(&self, document: &Document) -> Vec<CheckResult> {
        let lines = document.line_count();
        let length_evidence = format!("{lines} lines");
        let length = CheckResult::from_match(
            LENGTH_RULE,
            (lines >= self.min_lines).then_some(length_evidence.as_str()),
        );

        std::iter::once(length)
            .chain(scan(&self.registry, document))
            .collect()
    }
}
