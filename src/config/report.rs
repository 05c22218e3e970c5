use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_ARCHITECTURE_TEMPLATE: &str = "templates/architecture-template.md";
pub const DEFAULT_BRIEF_TEMPLATE: &str = "templates/product-brief-template.md";

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub color: bool,
    pub architecture_template: String,
    pub brief_template: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            color: true,
            architecture_template: DEFAULT_ARCHITECTURE_TEMPLATE.to_string(),
            brief_template: DEFAULT_BRIEF_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub color: Option<bool>,
    pub architecture_template: Option<String>,
    pub brief_template: Option<String>,
}

pub fn parse_report_section(
    raw: Option<RawReportSection>,
    path: &Path,
) -> Result<ReportSection, ConfigError> {
    let report_raw = raw.unwrap_or_default();
    let defaults = ReportSection::default();

    let architecture_template = report_raw
        .architecture_template
        .unwrap_or(defaults.architecture_template);
    validate_template(path, "report.architecture_template", &architecture_template)?;

    let brief_template = report_raw.brief_template.unwrap_or(defaults.brief_template);
    validate_template(path, "report.brief_template", &brief_template)?;

    Ok(ReportSection {
        color: report_raw.color.unwrap_or(defaults.color),
        architecture_template,
        brief_template,
    })
}

fn validate_template(path: &Path, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if !value.trim().is_empty() {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Template path must not be empty".into(),
    })
}
