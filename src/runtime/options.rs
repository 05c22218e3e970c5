use crate::{
    cli::{RunProfile, ValidatorKind},
    config::GateConfig,
    report::RenderOptions,
};

/// Merge CLI flags with config: color needs both to allow it.
pub fn render_options(profile: &RunProfile, config: &GateConfig) -> RenderOptions {
    let template = match profile.kind {
        ValidatorKind::Architecture => config.report.architecture_template.clone(),
        ValidatorKind::Brief => config.report.brief_template.clone(),
    };
    RenderOptions {
        format: profile.format,
        color: profile.color && config.report.color,
        template,
    }
}
