use crate::{
    cli::{RunProfile, ValidatorKind},
    config::GateConfig,
    lib::{document::Document, telemetry::ScanSpan},
    report::{self, Report},
    validators::{ArchitectureValidator, BriefValidator},
};

use super::{render_options, RunExit};

/// Rendered report plus the exit status its verdict selects.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    pub rendered: String,
    pub exit_code: u8,
}

/// Load the document, scan it with the selected validator and render the report.
///
/// Only a missing or unreadable document (or a broken catalog) is fatal; every
/// rule miss ends up inside the report.
pub fn run(profile: &RunProfile, config: &GateConfig) -> Result<RunOutcome, RunExit> {
    let document = Document::load(&profile.document_path)
        .map_err(|err| RunExit::from_error(err).with_usage())?;

    let report = match profile.kind {
        ValidatorKind::Architecture => {
            let validator = ArchitectureValidator::new().map_err(RunExit::from_error)?;
            let span =
                ScanSpan::start(profile.kind.as_str(), document.path(), validator.registry());
            let report = Report::Architecture(validator.validate(&document));
            span.finish(&report);
            report
        }
        ValidatorKind::Brief => {
            let validator = BriefValidator::new(&config.brief).map_err(RunExit::from_error)?;
            let span =
                ScanSpan::start(profile.kind.as_str(), document.path(), validator.registry());
            let report = Report::Brief(validator.validate(&document));
            span.finish(&report);
            report
        }
    };

    let options = render_options(profile, config);
    let rendered = report::render(&report, &options).map_err(RunExit::from_error)?;

    Ok(RunOutcome {
        exit_code: report.exit_code(),
        report,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::tempdir;

    use super::*;
    use crate::cli::OutputFormat;

    fn profile(kind: ValidatorKind, path: PathBuf, format: OutputFormat) -> RunProfile {
        RunProfile {
            kind,
            document_path: path,
            format,
            color: false,
            config_path: None,
        }
    }

    #[test]
    fn missing_document_is_fatal_with_usage() {
        let temp = tempdir().expect("can create temporary directory");
        let exit = run(
            &profile(
                ValidatorKind::Brief,
                temp.path().join("missing.md"),
                OutputFormat::Text,
            ),
            &GateConfig::default(),
        )
        .expect_err("missing document must not produce a report");

        assert_eq!(exit.exit_code(), 1);
        assert!(exit.message().contains("Document not found"));
        assert!(exit.message().contains("Usage: docgate"));
    }

    #[test]
    fn empty_architecture_document_yields_full_report() {
        let temp = tempdir().expect("can create temporary directory");
        let path = temp.path().join("arch.md");
        fs::write(&path, "").expect("can write document");

        let outcome = run(
            &profile(ValidatorKind::Architecture, path, OutputFormat::Text),
            &GateConfig::default(),
        )
        .expect("empty document still produces a report");

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.report.tally().total(), 20);
        assert_eq!(outcome.report.verdict(), "INVALID");
        assert!(outcome.rendered.contains("INVALID"));
    }

    #[test]
    fn configured_template_is_used_for_brief() {
        let temp = tempdir().expect("can create temporary directory");
        let path = temp.path().join("brief.md");
        fs::write(&path, "## Problem Statement\n").expect("can write document");
        let mut config = GateConfig::default();
        config.report.brief_template = "handbook/brief.md".into();

        let outcome = run(
            &profile(ValidatorKind::Brief, path, OutputFormat::Json),
            &config,
        )
        .expect("brief run succeeds");

        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.rendered.contains("\"template\": \"handbook/brief.md\""));
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = GateConfig::default();
        config.report.color = false;
        let mut run_profile = profile(
            ValidatorKind::Brief,
            PathBuf::from("b.md"),
            OutputFormat::Text,
        );
        run_profile.color = true;
        assert!(!render_options(&run_profile, &config).color);
        assert!(render_options(&run_profile, &GateConfig::default()).color);
    }
}
