//! Rule registry, scan engine and scorer shared by both validators.
mod rule;
mod scan;
mod score;

pub use rule::{MatchSpec, Registry, Requirement, Rule, RuleInfo, RuleSpec};
pub use scan::{evaluate, scan, CheckResult, Outcome};
pub use score::{percent, Tally};
