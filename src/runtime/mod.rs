//! Validator dispatch and process exit handling.
mod exit;
mod options;
mod startup;

pub use exit::RunExit;
pub use options::render_options;
pub use startup::{run, RunOutcome};
