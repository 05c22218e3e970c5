use std::{
    path::PathBuf,
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_docgate");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join("tests/fixtures").join(relative).display().to_string()
}

/// Run the binary with colors off so assertions see plain text.
pub fn run_docgate(args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .output()
        .expect("docgate should start")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
