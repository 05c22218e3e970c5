use tracing::{debug, info};

use super::GateConfig;

pub fn log_defaults() {
    debug!(
        target: "docgate::config",
        "No --config given; using built-in report settings"
    );
}

pub fn log_loaded(config: &GateConfig) {
    info!(
        target: "docgate::config",
        path = %config
            .source_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        color = config.report.color,
        architecture_template = %config.report.architecture_template,
        brief_template = %config.report.brief_template,
        min_lines = config.brief.min_lines,
        "Configuration file loaded successfully"
    );
}
