//! Product brief validator: section coverage, placeholders and advisories.
mod catalog;
mod heuristics;
mod placeholders;

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    config::BriefSection,
    engine::{percent, scan, CheckResult, Outcome, Registry, Tally},
    lib::{document::Document, errors::RuleError},
};

pub use catalog::{catalog, CATALOG_NAME, REQUIRED_SECTIONS, SECTION_CATEGORY};
pub use heuristics::{Advisories, ADVISORY_CATEGORY};
pub use placeholders::PlaceholderScanner;

/// Completeness needed for `MostlyComplete`.
pub const MOSTLY_COMPLETE_THRESHOLD: u8 = 80;

/// Which required sections were found, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCoverage {
    #[serde(rename = "sections_found")]
    pub found: usize,
    #[serde(rename = "sections_total")]
    pub total: usize,
    #[serde(rename = "missing_sections")]
    pub missing: Vec<&'static str>,
}

impl SectionCoverage {
    pub fn from_results(results: &[CheckResult]) -> Self {
        Self {
            found: results.iter().filter(|r| r.passed()).count(),
            total: results.len(),
            missing: results
                .iter()
                .filter(|r| !r.passed())
                .map(|r| r.rule.name)
                .collect(),
        }
    }

    pub fn completeness(&self) -> u8 {
        percent(self.found, self.total)
    }
}

/// Three-tier brief verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BriefVerdict {
    Complete,
    MostlyComplete,
    Incomplete,
}

impl BriefVerdict {
    /// Evaluated in precedence order: complete, mostly complete, incomplete.
    pub fn derive(completeness: u8, placeholder_count: usize) -> Self {
        if completeness == 100 && placeholder_count == 0 {
            BriefVerdict::Complete
        } else if completeness >= MOSTLY_COMPLETE_THRESHOLD {
            BriefVerdict::MostlyComplete
        } else {
            BriefVerdict::Incomplete
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            BriefVerdict::Complete => "COMPLETE",
            BriefVerdict::MostlyComplete => "MOSTLY_COMPLETE",
            BriefVerdict::Incomplete => "INCOMPLETE",
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            BriefVerdict::Complete => 0,
            BriefVerdict::MostlyComplete | BriefVerdict::Incomplete => 1,
        }
    }
}

/// Everything the reporter needs about one brief run.
#[derive(Debug, Clone, Serialize)]
pub struct BriefReport {
    pub path: PathBuf,
    pub lines: usize,
    pub checks: Vec<CheckResult>,
    pub tally: Tally,
    #[serde(flatten)]
    pub coverage: SectionCoverage,
    pub completeness: u8,
    pub placeholders: Vec<String>,
    pub advisories: Vec<CheckResult>,
    pub verdict: BriefVerdict,
}

impl BriefReport {
    pub fn advisory_warnings(&self) -> usize {
        self.advisories
            .iter()
            .filter(|a| a.outcome == Outcome::Warn)
            .count()
    }
}

/// Compiled brief validator.
#[derive(Debug, Clone)]
pub struct BriefValidator {
    sections: Registry,
    placeholders: PlaceholderScanner,
    advisories: Advisories,
}

impl BriefValidator {
    pub fn new(settings: &BriefSection) -> Result<Self, RuleError> {
        Ok(Self {
            sections: Registry::compile(CATALOG_NAME, catalog())?,
            placeholders: PlaceholderScanner::new()?,
            advisories: Advisories::new(settings.min_lines)?,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.sections
    }

    pub fn validate(&self, document: &Document) -> BriefReport {
        let checks = scan(&self.sections, document);
        let tally = Tally::from_results(&checks);
        let coverage = SectionCoverage::from_results(&checks);
        let completeness = coverage.completeness();
        let placeholders: Vec<String> = self
            .placeholders
            .scan(document.text())
            .into_iter()
            .collect();
        let verdict = BriefVerdict::derive(completeness, placeholders.len());

        BriefReport {
            path: document.path().to_path_buf(),
            lines: document.line_count(),
            advisories: self.advisories.evaluate(document),
            checks,
            tally,
            coverage,
            completeness,
            placeholders,
            verdict,
        }
    }
}
