//! Entry point for docgate.
use std::process::ExitCode;

use clap::Parser;
use docgate::{cli::GateArgs, config::GateConfig, lib::telemetry, runtime::RunExit};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = GateArgs::try_parse().map_err(RunExit::from_clap)?;
    let profile = args.into_profile().map_err(RunExit::from_error)?;
    let config = GateConfig::load(profile.config_path.as_deref()).map_err(RunExit::from_error)?;

    let outcome = docgate::runtime::run(&profile, &config)?;
    print!("{}", outcome.rendered);
    Ok(ExitCode::from(outcome.exit_code))
}
