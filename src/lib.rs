//! Library crate root re-exporting the engine, validators and CLI plumbing.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod engine;
pub mod report;
pub mod runtime;
pub mod validators;
