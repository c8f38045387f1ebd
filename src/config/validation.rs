//! Validation logic for loaded configuration.

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use super::Config;

impl Config {
    /// Validate configuration.
    ///
    /// Hard errors abort the run; softer problems are logged as warnings and
    /// returned so callers can surface them.
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.input.as_os_str().is_empty() {
            anyhow::bail!("input path must not be empty");
        }
        if self.output.as_os_str().is_empty() {
            anyhow::bail!("output path must not be empty");
        }
        if normalize(&self.input) == normalize(&self.output) {
            anyhow::bail!(
                "output path {} is the same as the input path; the report would overwrite the file being checked",
                self.output.display()
            );
        }

        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for (idx, entry) in self.checks.iter().enumerate() {
            if entry.name.trim().is_empty() {
                anyhow::bail!("checks[{}] has an empty name", idx);
            }
            if entry.pattern.is_empty() {
                warnings.push(format!(
                    "check '{}' has an empty pattern and always passes",
                    entry.name
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                warnings.push(format!("check name '{}' appears more than once", entry.name));
            }
        }

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        Ok(warnings)
    }
}

/// Absolute form of `path` with symlinks, `.` and `..` resolved as far as
/// the filesystem allows. A file that does not exist yet is resolved through
/// its parent directory.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    if let Ok(canonical) = absolute.canonicalize() {
        return canonical;
    }

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = parent.canonicalize() {
            return parent.join(name);
        }
    }

    absolute
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
