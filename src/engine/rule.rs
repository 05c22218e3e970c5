//! Rule records and the compiled registry they live in.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

use crate::lib::errors::RuleError;

/// Whether a rule miss fails the verdict or only warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

impl Requirement {
    pub const fn is_required(&self) -> bool {
        matches!(self, Requirement::Required)
    }
}

fn serialize_required<S: Serializer>(
    requirement: &Requirement,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(requirement.is_required())
}

/// Identity of a rule, carried into every result it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub category: &'static str,
    pub name: &'static str,
    #[serde(rename = "required", serialize_with = "serialize_required")]
    pub requirement: Requirement,
    /// Suggested fix shown when the rule does not match.
    #[serde(skip)]
    pub hint: &'static str,
}

/// Declarative catalog row. Fragments are regex syntax and are joined as an alternation.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub info: RuleInfo,
    pub fragments: Vec<String>,
}

impl RuleSpec {
    pub fn required(category: &'static str, name: &'static str) -> Self {
        Self::new(category, name, Requirement::Required)
    }

    pub fn optional(category: &'static str, name: &'static str) -> Self {
        Self::new(category, name, Requirement::Optional)
    }

    fn new(category: &'static str, name: &'static str, requirement: Requirement) -> Self {
        Self {
            info: RuleInfo {
                category,
                name,
                requirement,
                hint: "",
            },
            fragments: Vec::new(),
        }
    }

    pub fn matching<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragments.extend(fragments.into_iter().map(Into::into));
        self
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.info.hint = hint;
        self
    }
}

/// Case-insensitive alternation tested against the whole document.
#[derive(Debug, Clone)]
pub struct MatchSpec {
    regex: Regex,
}

impl MatchSpec {
    pub fn compile(fragments: &[String]) -> Result<Self, regex::Error> {
        let alternation = fragments
            .iter()
            .map(|fragment| format!("(?:{fragment})"))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .multi_line(true)
            .build()?;
        Ok(Self { regex })
    }

    /// First matching span, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|found| found.as_str())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// A named check backed by a compiled pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    info: RuleInfo,
    pattern: MatchSpec,
}

impl Rule {
    pub fn info(&self) -> RuleInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn is_required(&self) -> bool {
        self.info.requirement.is_required()
    }

    pub fn pattern(&self) -> &MatchSpec {
        &self.pattern
    }
}

/// Ordered, read-only rule catalog for one validator.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    /// Compile every spec in order, rejecting duplicate names and empty or invalid patterns.
    pub fn compile(
        catalog: &'static str,
        specs: impl IntoIterator<Item = RuleSpec>,
    ) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();
        for spec in specs {
            let name = spec.info.name;
            if !seen.insert(name) {
                return Err(RuleError::DuplicateName {
                    rule: name,
                    catalog,
                });
            }
            if spec.fragments.is_empty() {
                return Err(RuleError::EmptyPattern { rule: name });
            }
            let pattern = MatchSpec::compile(&spec.fragments)
                .map_err(|source| RuleError::InvalidPattern { rule: name, source })?;
            rules.push(Rule {
                info: spec.info,
                pattern,
            });
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn required_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.is_required()).count()
    }
}
