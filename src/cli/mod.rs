//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::{DocumentArgs, GateArgs, ValidateCommand};
pub use profile::{resolve_config_path, OutputFormat, RunProfile, ValidatorKind};

/// One-line usage shown on fatal input errors.
pub const USAGE: &str = "Usage: docgate <architecture|brief> <PATH>";
