//! Telemetry initialization and scan span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

use crate::{engine::Registry, report::Report};

/// Initialize `tracing` on stderr so stdout carries only the report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one document scan.
pub struct ScanSpan {
    span: Span,
    started_at: Instant,
    validator: &'static str,
}

impl ScanSpan {
    /// Start a scan span.
    pub fn start(validator: &'static str, path: &Path, registry: &Registry) -> Self {
        let span = info_span!(
            target: "docgate::scan",
            "document_scan",
            validator,
            path = %path.display(),
            rule_count = registry.rules().len(),
            required = registry.required_count()
        );
        Self {
            span,
            started_at: Instant::now(),
            validator,
        }
    }

    /// Close the span while recording the verdict and outcome counts.
    pub fn finish(self, report: &Report) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let tally = report.tally();
        let _entered = self.span.enter();
        info!(
            target: "docgate::scan",
            validator = self.validator,
            verdict = report.verdict(),
            pass = tally.pass,
            fail = tally.fail,
            warn = tally.warn,
            elapsed_ms = elapsed_ms,
            "Completed document scan"
        );
    }
}
