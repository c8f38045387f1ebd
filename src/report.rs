//! Check results, the aggregate validation report, and its text rendering.
//!
//! Rendering is deterministic: identical inputs always produce byte-identical
//! text, so rendered reports can be compared against golden files.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Footer line closing every report.
pub const FOOTER: &str = "=== VALIDATION COMPLETE ===";

/// Outcome of a single check, or of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Status::Passed
        } else {
            Status::Failed
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => write!(f, "PASSED"),
            Status::Failed => write!(f, "FAILED"),
        }
    }
}

/// Result of testing one checklist entry against the target text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub pattern: String,
    pub passed: bool,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            passed,
        }
    }

    pub fn status(&self) -> Status {
        Status::from_passed(self.passed)
    }
}

/// All check results for one run plus the overall verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub title: String,
    pub source: PathBuf,
    pub checks: Vec<CheckResult>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<PathBuf>,
        checks: Vec<CheckResult>,
    ) -> Self {
        let passed = crate::validator::aggregate(&checks);
        Self {
            title: title.into(),
            source: source.into(),
            checks,
            passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed
    }

    pub fn status(&self) -> Status {
        Status::from_passed(self.passed)
    }

    pub fn failed_checks(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Text printed to standard output.
    pub fn render(&self) -> String {
        render(&self.title, &self.checks, self.passed)
    }

    /// Text persisted to the report file.
    pub fn render_file(&self) -> String {
        render_file(&self.title, &self.checks, self.passed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Header line for a report with the given title.
pub fn header(title: &str) -> String {
    format!("=== {} ===", title)
}

/// Line reported for one check: `<name>: PASSED` or `<name>: FAILED`.
pub fn check_line(result: &CheckResult) -> String {
    format!("{}: {}", result.name, result.status())
}

/// Line carrying the overall verdict.
pub fn overall_line(overall: bool) -> String {
    format!("Overall validation: {}", Status::from_passed(overall))
}

/// Render the report: header, blank line, one line per check, blank line,
/// overall status, blank line, footer. Every line is newline-terminated.
pub fn render(title: &str, results: &[CheckResult], overall: bool) -> String {
    let mut out = String::new();

    out.push_str(&header(title));
    out.push_str("\n\n");

    for result in results {
        out.push_str(&check_line(result));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&overall_line(overall));
    out.push_str("\n\n");
    out.push_str(FOOTER);
    out.push('\n');

    out
}

/// File variant of [`render`]: a leading blank line, and the check lines
/// joined as one block, so an empty checklist still leaves an empty line
/// between the header and the overall status.
pub fn render_file(title: &str, results: &[CheckResult], overall: bool) -> String {
    let lines: Vec<String> = results.iter().map(check_line).collect();

    format!(
        "\n{}\n\n{}\n\n{}\n\n{}\n",
        header(title),
        lines.join("\n"),
        overall_line(overall),
        FOOTER
    )
}
