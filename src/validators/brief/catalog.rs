use crate::engine::RuleSpec;

pub const CATALOG_NAME: &str = "brief";
pub const SECTION_CATEGORY: &str = "Required Sections";

/// Required brief sections, in report order.
pub const REQUIRED_SECTIONS: [&str; 11] = [
    "Executive Summary",
    "Problem Statement",
    "Target Users",
    "Value Proposition",
    "Key Features",
    "Success Metrics",
    "Scope",
    "Constraints",
    "Assumptions",
    "Risks",
    "Timeline",
];

/// One header rule per section: `#`, `##` or `###` at line start followed by the name.
pub fn catalog() -> Vec<RuleSpec> {
    REQUIRED_SECTIONS
        .iter()
        .map(|&section| {
            RuleSpec::required(SECTION_CATEGORY, section)
                .matching([header_pattern(section)])
                .hint(section_hint(section))
        })
        .collect()
}

fn section_hint(section: &str) -> &'static str {
    match section {
        "Executive Summary" => "Add `## Executive Summary` summarizing the product.",
        "Problem Statement" => "Add `## Problem Statement` describing the pain and who feels it.",
        "Target Users" => "Add `## Target Users` naming the primary personas.",
        "Value Proposition" => "Add `## Value Proposition` stating why users would switch.",
        "Key Features" => "Add `## Key Features` listing the must-have capabilities.",
        "Success Metrics" => "Add `## Success Metrics` with measurable targets.",
        "Scope" => "Add `## Scope` separating what is in and out of the first release.",
        "Constraints" => "Add `## Constraints` covering budget, technical and regulatory limits.",
        "Assumptions" => "Add `## Assumptions` listing what must hold true.",
        "Risks" => "Add `## Risks` with the main risks and their mitigations.",
        "Timeline" => "Add `## Timeline` with milestones and target dates.",
        _ => "Add the section as a `##` header.",
    }
}

fn header_pattern(section: &str) -> String {
    format!(r"^#{{1,3}}[ \t]*{}", regex::escape(section))
}
