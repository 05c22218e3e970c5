//! RunProfile and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Report output format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validator instance selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    Architecture,
    Brief,
}

impl ValidatorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Architecture => "architecture",
            ValidatorKind::Brief => "brief",
        }
    }
}

/// Resolved invocation.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub kind: ValidatorKind,
    /// Kept as given so reports echo the path the user typed.
    pub document_path: PathBuf,
    pub format: OutputFormat,
    /// `false` when `--no-color` was passed.
    pub color: bool,
    pub config_path: Option<PathBuf>,
}

/// Make a `--config` path absolute against the current directory.
pub fn resolve_config_path(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
