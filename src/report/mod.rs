//! Report model and rendering (text or JSON).
mod json;
mod text;

use anyhow::Result;

use crate::{
    cli::OutputFormat,
    engine::Tally,
    validators::{ArchitectureReport, BriefReport},
};

pub use json::render_json;
pub use text::{render_architecture, render_brief, Palette};

/// Result of one validator run, ready to render.
#[derive(Debug, Clone)]
pub enum Report {
    Architecture(ArchitectureReport),
    Brief(BriefReport),
}

impl Report {
    pub fn validator(&self) -> &'static str {
        match self {
            Report::Architecture(_) => "architecture",
            Report::Brief(_) => "brief",
        }
    }

    pub fn tally(&self) -> &Tally {
        match self {
            Report::Architecture(report) => &report.tally,
            Report::Brief(report) => &report.tally,
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Report::Architecture(report) => report.verdict.as_str(),
            Report::Brief(report) => report.verdict.as_str(),
        }
    }

    /// Process exit status for the verdict: 0 passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Architecture(report) => report.verdict.exit_code(),
            Report::Brief(report) => report.verdict.exit_code(),
        }
    }
}

/// Presentation choices resolved from CLI flags and config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub color: bool,
    /// Reference template named in remediation text. Never read.
    pub template: String,
}

pub fn render(report: &Report, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => {
            let palette = Palette::new(options.color);
            Ok(match report {
                Report::Architecture(report) => {
                    render_architecture(report, &palette, &options.template)
                }
                Report::Brief(report) => render_brief(report, &palette, &options.template),
            })
        }
        OutputFormat::Json => render_json(report, &options.template),
    }
}
