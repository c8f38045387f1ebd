//! Standard-output sink for reports.
//!
//! Supports three modes:
//! - Text: the rendered report, with PASSED/FAILED colored on a terminal
//! - Json: the report as a pretty-printed JSON document
//! - Quiet: nothing on stdout (the report file is still written)
//!
//! The writer can be injected so tests capture exactly what would be printed.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::checklist::Checklist;
use crate::report::{self, Status, ValidationReport};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("STRUCTCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Quiet,
}

#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a validation report in the current mode.
    pub fn report(&self, report: &ValidationReport) -> Result<()> {
        match self.mode {
            OutputMode::Text if self.is_tty => self.write(&colorize(report)),
            OutputMode::Text => self.write(&report.render()),
            OutputMode::Json => self.write(&format!("{}\n", report.to_json()?)),
            OutputMode::Quiet => Ok(()),
        }
    }

    /// Print the checklist that a run would apply.
    pub fn checklist(&self, checklist: &Checklist) -> Result<()> {
        match self.mode {
            OutputMode::Text => {
                let mut out = String::new();
                for entry in checklist {
                    let name = if self.is_tty {
                        entry.name.cyan().to_string()
                    } else {
                        entry.name.clone()
                    };
                    out.push_str(&format!("{}\n    {}\n", name, entry.pattern));
                }
                self.write(&out)
            }
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(checklist)?;
                self.write(&format!("{}\n", json))
            }
            OutputMode::Quiet => Ok(()),
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) -> Result<()> {
        match self.mode {
            OutputMode::Text => {
                let prefix = if self.is_tty {
                    "✓".green().to_string()
                } else {
                    "✓".to_string()
                };
                self.write(&format!("{} {}\n", prefix, msg))
            }
            OutputMode::Json => {
                let event = serde_json::json!({ "level": "success", "msg": msg });
                self.write(&format!("{}\n", event))
            }
            OutputMode::Quiet => Ok(()),
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("output writer lock poisoned"))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Same layout as [`ValidationReport::render`], with colored verdicts.
fn colorize(report: &ValidationReport) -> String {
    let paint = |status: Status| match status {
        Status::Passed => status.to_string().green().to_string(),
        Status::Failed => status.to_string().red().to_string(),
    };

    let mut out = String::new();
    out.push_str(&report::header(&report.title).bold().to_string());
    out.push_str("\n\n");
    for check in &report.checks {
        out.push_str(&format!("{}: {}\n", check.name, paint(check.status())));
    }
    out.push_str(&format!("\nOverall validation: {}\n\n", paint(report.status())));
    out.push_str(report::FOOTER);
    out.push('\n');
    out
}
