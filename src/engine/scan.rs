//! Apply every rule in a registry to a document.

use serde::Serialize;
use tracing::debug;

use super::rule::{Registry, Rule, RuleInfo};
use crate::lib::document::Document;

/// Per-rule result of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Pass,
    Fail,
    Warn,
}

impl Outcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Warn => "WARN",
        }
    }
}

/// One rule's outcome plus the text that satisfied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    #[serde(flatten)]
    pub rule: RuleInfo,
    pub outcome: Outcome,
    pub matched: Option<String>,
}

impl CheckResult {
    /// Result for a rule given the span it matched, if any.
    pub fn from_match(rule: RuleInfo, matched: Option<&str>) -> Self {
        let outcome = match (matched, rule.requirement.is_required()) {
            (Some(_), _) => Outcome::Pass,
            (None, true) => Outcome::Fail,
            (None, false) => Outcome::Warn,
        };
        Self {
            rule,
            outcome,
            matched: matched.map(|text| text.trim().to_string()),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}

/// Evaluate one rule against the document text.
pub fn evaluate(rule: &Rule, document: &Document) -> CheckResult {
    let result = CheckResult::from_match(rule.info(), rule.pattern().find(document.text()));
    debug!(
        target: "docgate::scan",
        rule = rule.name(),
        outcome = result.outcome.as_str(),
        "Evaluated rule"
    );
    result
}

/// Evaluate every rule in registry order. Never stops early.
pub fn scan(registry: &Registry, document: &Document) -> Vec<CheckResult> {
    registry
        .rules()
        .iter()
        .map(|rule| evaluate(rule, document))
        .collect()
}
