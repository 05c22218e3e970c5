//! Architecture document validator: structural, NFR, completeness, style and integration checks.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    engine::{scan, CheckResult, Outcome, Registry, RuleSpec, Tally},
    lib::{document::Document, errors::RuleError},
};

pub const CATALOG_NAME: &str = "architecture";

const STRUCTURE: &str = "Structure";
const NFR_COVERAGE: &str = "NFR Coverage";
const COMPLETENESS: &str = "Completeness";
const ARCHITECTURE_STYLE: &str = "Architecture Style";
const INTEGRATION: &str = "Integration";

/// Styles accepted by the pattern-family check. Any one of them passes it.
pub const ARCHITECTURE_STYLES: &[&str] = &["monolith", "microservice", "serverless", "layered"];

/// Fixed rule catalog, in report order.
pub fn catalog() -> Vec<RuleSpec> {
    vec![
        RuleSpec::required(STRUCTURE, "System Overview")
            .matching(["system overview", r"\boverview\b"])
            .hint("Add a System Overview section describing context, scope and actors."),
        RuleSpec::required(STRUCTURE, "Architecture Pattern")
            .matching([
                r"architect(?:ure|ural) (?:pattern|style)",
                r"\bpatterns?\b",
            ])
            .hint("State the chosen architecture pattern and why it fits."),
        RuleSpec::required(STRUCTURE, "Component Design")
            .matching(["component design", r"\bcomponents?\b"])
            .hint("Describe each component, its responsibility and its interfaces."),
        RuleSpec::required(STRUCTURE, "Data Model")
            .matching(["data model", r"\bschemas?\b", r"\bentit(?:y|ies)\b"])
            .hint("Document the data model: entities, relationships and storage."),
        RuleSpec::required(STRUCTURE, "API Specifications")
            .matching(["api spec", r"\bapis?\b", r"\bendpoints?\b"])
            .hint("Specify the API surface: endpoints, payloads and error contracts."),
        RuleSpec::required(STRUCTURE, "NFR Mapping")
            .matching([r"\bnfrs?\b", "non-functional"])
            .hint("Map each non-functional requirement to the design decision that meets it."),
        RuleSpec::required(STRUCTURE, "Technology Stack")
            .matching(["technology stack", "tech stack"])
            .hint("List the technology stack with versions and the reason for each choice."),
        RuleSpec::required(STRUCTURE, "Trade-off Analysis")
            .matching([r"trade-?offs?"])
            .hint("Add a trade-off analysis comparing the alternatives considered."),
        RuleSpec::required(NFR_COVERAGE, "Performance")
            .matching(["performance", "latency", "throughput", "response time"])
            .hint("Give performance targets such as latency or throughput budgets."),
        RuleSpec::required(NFR_COVERAGE, "Security")
            .matching(["security", "authentication", "authorization", "encryption"])
            .hint("Cover authentication, authorization and data protection."),
        RuleSpec::required(NFR_COVERAGE, "Scalability")
            .matching(["scalab", "horizontal scaling", "load balanc"])
            .hint("Explain how the system scales and where the limits are."),
        RuleSpec::optional(NFR_COVERAGE, "Availability")
            .matching(["availability", "uptime", "failover", "redundan"])
            .hint("Consider availability targets and failover behavior."),
        RuleSpec::optional(NFR_COVERAGE, "Maintainability")
            .matching(["maintainab", "modularity", "technical debt"])
            .hint("Consider how the design stays maintainable as it grows."),
        RuleSpec::optional(NFR_COVERAGE, "Observability")
            .matching(["observability", "monitoring", "alerting", r"\btracing\b"])
            .hint("Consider monitoring, logging and alerting."),
        RuleSpec::required(COMPLETENESS, "Deployment Strategy")
            .matching([r"\bdeploy"])
            .hint("Describe how the system is deployed and released."),
        // Overlaps the structural trade-off check on purpose; both count.
        RuleSpec::required(COMPLETENESS, "Decision Rationale")
            .matching([r"trade-?offs?", r"\brationale\b", "alternatives considered"])
            .hint("Record the rationale behind key decisions."),
        RuleSpec::required(COMPLETENESS, "Risk Assessment")
            .matching([r"\brisks?\b", "mitigation"])
            .hint("List the main technical risks and their mitigations."),
        RuleSpec::optional(COMPLETENESS, "Diagrams")
            .matching(["diagram", "mermaid", "plantuml"])
            .hint("Consider adding a component or deployment diagram."),
        RuleSpec::required(ARCHITECTURE_STYLE, "Architecture Style")
            .matching(ARCHITECTURE_STYLES.iter().copied())
            .hint("Name the architecture style: monolith, microservices, serverless or layered."),
        RuleSpec::required(INTEGRATION, "Integration Patterns")
            .matching([
                r"\brest(?:ful)?\b",
                "graphql",
                r"\bgrpc\b",
                "message queue",
                r"\bevents?\b",
            ])
            .hint("Describe integration patterns: REST, GraphQL, gRPC, message queues or events."),
    ]
}

/// Binary verdict for architecture documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchitectureVerdict {
    Valid,
    Invalid,
}

impl ArchitectureVerdict {
    /// VALID iff no required check failed; warnings never downgrade it.
    pub fn from_tally(tally: &Tally) -> Self {
        if tally.fail == 0 {
            ArchitectureVerdict::Valid
        } else {
            ArchitectureVerdict::Invalid
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ArchitectureVerdict::Valid => "VALID",
            ArchitectureVerdict::Invalid => "INVALID",
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            ArchitectureVerdict::Valid => 0,
            ArchitectureVerdict::Invalid => 1,
        }
    }
}

/// Everything the reporter needs about one architecture run.
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureReport {
    pub path: PathBuf,
    pub lines: usize,
    pub checks: Vec<CheckResult>,
    pub tally: Tally,
    pub verdict: ArchitectureVerdict,
}

impl ArchitectureReport {
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.outcome == Outcome::Fail)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.outcome == Outcome::Warn)
    }
}

/// Compiled architecture validator. Build once, run on any number of documents.
#[derive(Debug, Clone)]
pub struct ArchitectureValidator {
    registry: Registry,
}

impl ArchitectureValidator {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            registry: Registry::compile(CATALOG_NAME, catalog())?,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn validate(&self, document: &Document) -> ArchitectureReport {
        let checks = scan(&self.registry, document);
        let tally = Tally::from_results(&checks);
        ArchitectureReport {
            path: document.path().to_path_buf(),
            lines: document.line_count(),
            verdict: ArchitectureVerdict::from_tally(&tally),
            checks,
            tally,
        }
    }
}
