//! Load and validate the optional report configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod brief;
pub mod report;
pub mod telemetry;

pub use brief::{parse_brief_section, BriefSection, RawBriefSection, DEFAULT_MIN_LINES};
pub use report::{
    parse_report_section, RawReportSection, ReportSection, DEFAULT_ARCHITECTURE_TEMPLATE,
    DEFAULT_BRIEF_TEMPLATE,
};

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateConfig {
    pub report: ReportSection,
    pub brief: BriefSection,
    /// `None` when running on built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawGateConfig {
    report: Option<RawReportSection>,
    brief: Option<RawBriefSection>,
}

impl GateConfig {
    /// Load from `path` when given; otherwise use defaults without touching the filesystem.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path.to_path_buf()),
            None => {
                telemetry::log_defaults();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "docgate::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawGateConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawGateConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let report = parse_report_section(raw.report, &path)?;
        let brief = parse_brief_section(raw.brief, &path)?;

        Ok(Self {
            report,
            brief,
            source_path: Some(path),
        })
    }
}
