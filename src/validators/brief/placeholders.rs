use std::collections::BTreeSet;

use regex::Regex;

use crate::lib::errors::RuleError;

/// Unfilled template token: `{{` + uppercase letters or underscores + `}}`.
const PLACEHOLDER_PATTERN: &str = r"\{\{[A-Z_]+\}\}";

/// Finds distinct placeholder tokens. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct PlaceholderScanner {
    regex: Regex,
}

impl PlaceholderScanner {
    pub fn new() -> Result<Self, RuleError> {
        let regex = Regex::new(PLACEHOLDER_PATTERN).map_err(|source| {
            RuleError::InvalidPattern {
                rule: "Placeholders",
                source,
            }
        })?;
        Ok(Self { regex })
    }

    /// Distinct tokens in sorted order.
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        self.regex
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect()
    }
}
