//! Structural validation of a text artifact against a checklist.
//!
//! `evaluate` and `aggregate` are pure. File access is confined to `load`
//! (one read) and `emit` (one stdout write, one full overwrite of the report
//! file). The input is always read before anything is written, so a failed
//! read leaves any previous report untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::checklist::Checklist;
use crate::config::Config;
use crate::output::Output;
use crate::report::{CheckResult, ValidationReport};

/// Read the whole target file as UTF-8 text.
///
/// A missing, unreadable, or non-UTF-8 file yields an error whose root cause
/// is the underlying `std::io::Error`.
pub fn load(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded input");
    Ok(text)
}

/// Test every checklist entry against `text`, in checklist order.
///
/// Matching is an exact, case-sensitive substring test. Every entry is
/// evaluated even after a failure.
pub fn evaluate(text: &str, checklist: &Checklist) -> Vec<CheckResult> {
    checklist
        .iter()
        .map(|entry| {
            let passed = text.contains(entry.pattern.as_str());
            tracing::trace!(name = %entry.name, passed, "evaluated check");
            CheckResult::new(entry.name.clone(), entry.pattern.clone(), passed)
        })
        .collect()
}

/// Overall verdict: true iff every check passed (true for no checks).
pub fn aggregate(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

/// Print the report to `output`, then overwrite `path` with the file rendering.
pub fn emit(report: &ValidationReport, output: &Output, path: &Path) -> Result<()> {
    output.report(report)?;

    fs::write(path, report.render_file())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote report");

    Ok(())
}

/// Validate `text` in memory, without touching the filesystem.
pub fn validate_text(text: &str, config: &Config) -> ValidationReport {
    let results = evaluate(text, &config.checks);
    ValidationReport::new(config.title.clone(), config.input.clone(), results)
}

/// Run a full validation: load, evaluate, aggregate, emit.
pub fn run(config: &Config, output: &Output) -> Result<ValidationReport> {
    let text = load(&config.input)?;
    let report = validate_text(&text, config);

    tracing::info!(
        checks = report.checks.len(),
        failed = report.failed_checks().len(),
        passed = report.passed,
        "validation finished"
    );

    emit(&report, output, &config.output)?;
    Ok(report)
}
