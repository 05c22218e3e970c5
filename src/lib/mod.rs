//! Shared library modules providing error types, document loading, and telemetry initialization.

pub mod document;
pub mod errors;
pub mod telemetry;
