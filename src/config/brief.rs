use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_MIN_LINES: usize = 100;

/// Brief advisory settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefSection {
    pub min_lines: usize,
}

impl Default for BriefSection {
    fn default() -> Self {
        Self {
            min_lines: DEFAULT_MIN_LINES,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawBriefSection {
    pub min_lines: Option<usize>,
}

pub fn parse_brief_section(
    raw: Option<RawBriefSection>,
    path: &Path,
) -> Result<BriefSection, ConfigError> {
    let min_lines = raw
        .unwrap_or_default()
        .min_lines
        .unwrap_or(DEFAULT_MIN_LINES);
    if min_lines == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "brief.min_lines",
            message: "Use a line count of at least 1".into(),
        });
    }
    Ok(BriefSection { min_lines })
}
