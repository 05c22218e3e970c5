//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_path, OutputFormat, RunProfile, ValidatorKind};

/// Which validator to run, and on what.
#[derive(Debug, Clone, Subcommand)]
pub enum ValidateCommand {
    /// Validate an architecture document.
    #[command(visible_alias = "arch")]
    Architecture(DocumentArgs),
    /// Validate a product brief.
    Brief(DocumentArgs),
}

/// Positional document argument shared by both validators.
#[derive(Debug, Clone, Args)]
pub struct DocumentArgs {
    /// Path to the document to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "docgate",
    author,
    version,
    about = "Check whether an architecture document or product brief is complete enough to hand off",
    long_about = None,
    after_help = "Exit status: 0 when the document passes (VALID / COMPLETE), 1 otherwise."
)]
pub struct GateArgs {
    #[command(subcommand)]
    pub command: ValidateCommand,
    /// Report format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional docgate.toml with report settings.
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_override: Option<PathBuf>,
    /// Disable ANSI colors in the text report.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

impl GateArgs {
    /// Build a `RunProfile` from parsed arguments.
    pub fn into_profile(self) -> Result<RunProfile> {
        let (kind, document) = match self.command {
            ValidateCommand::Architecture(args) => (ValidatorKind::Architecture, args.path),
            ValidateCommand::Brief(args) => (ValidatorKind::Brief, args.path),
        };
        let config_path = self
            .config_override
            .map(resolve_config_path)
            .transpose()?;

        Ok(RunProfile {
            kind,
            document_path: document,
            format: self.format,
            color: !self.no_color,
            config_path,
        })
    }
}
