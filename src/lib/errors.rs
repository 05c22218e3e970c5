use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Fatal problems with the document named on the command line.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document not found: {path}")]
    NotFound { path: PathBuf },
    #[error("Failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Map an I/O failure to `NotFound` when the file is missing, `Read` otherwise.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

/// A rule catalog entry could not be turned into a matcher.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule `{rule}` has an invalid pattern: {source}")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("Rule `{rule}` is defined more than once in the {catalog} catalog")]
    DuplicateName {
        rule: &'static str,
        catalog: &'static str,
    },
    #[error("Rule `{rule}` has no patterns")]
    EmptyPattern { rule: &'static str },
}
