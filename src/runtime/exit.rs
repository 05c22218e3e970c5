use std::process::ExitCode;

use anyhow::Error;

use crate::cli::USAGE;

/// Bundles a fatal diagnostic with the exit code the process should return.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: u8,
    to_stdout: bool,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("error: {err:#}"),
            exit_code: 1,
            to_stdout: false,
        }
    }

    /// Missing-input failures also print the usage line.
    pub fn with_usage(mut self) -> Self {
        self.message = format!("{}\n{USAGE}", self.message);
        self
    }

    /// `--help`/`--version` exit 0 on stdout; every other parse error is a usage error (exit 1).
    pub fn from_clap(err: clap::Error) -> Self {
        let to_stdout = !err.use_stderr();
        Self {
            message: err.render().to_string().trim_end().to_string(),
            exit_code: if to_stdout { 0 } else { 1 },
            to_stdout,
        }
    }

    pub fn report(self) -> ExitCode {
        if self.to_stdout {
            println!("{}", self.message);
        } else {
            eprintln!("{}", self.message);
        }
        ExitCode::from(self.exit_code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}
