//! Configuration for a validation run.
//!
//! The validator never reads process-wide state; everything it needs arrives
//! in a [`Config`] value. Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file (`--config <path>`, or `.structcheck.yml` when present)
//! 3. Command-line overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checklist::Checklist;
use crate::paths::CONFIG_FILE;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File whose structure is checked.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Report file, overwritten on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
    /// Omitted means the built-in spell-compiler checklist; `[]` means no checks.
    #[serde(default = "default_checks")]
    pub checks: Checklist,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            title: default_title(),
            checks: default_checks(),
        }
    }
}

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
}

impl Config {
    /// Resolve configuration for a run started in `dir`.
    ///
    /// An explicit path must exist. Without one, `dir/.structcheck.yml` is used
    /// when present, otherwise built-in defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let discovered = dir.join(CONFIG_FILE);
        if discovered.exists() {
            tracing::debug!(path = %discovered.display(), "using discovered config file");
            Self::load_from(&discovered)
        } else {
            tracing::debug!("no config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(title) = overrides.title {
            self.title = title;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ChecklistEntry;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_spell_compiler_setup() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("spellCompiler.lua"));
        assert_eq!(config.output, PathBuf::from("compiler_validation_results.txt"));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.checks, Checklist::spell_compiler());
    }

    #[test]
    fn test_parse_empty_document_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = Config::parse("input: src/compiler.lua\n").unwrap();
        assert_eq!(config.input, PathBuf::from("src/compiler.lua"));
        assert_eq!(config.output, default_output());
        assert_eq!(config.checks.len(), 8);
    }

    #[test]
    fn test_parse_explicit_empty_checks() {
        let config = Config::parse("checks: []\n").unwrap();
        assert!(config.checks.is_empty());
    }

    #[test]
    fn test_parse_custom_checks() {
        let yaml = r#"
title: LEXER STRUCTURE VALIDATION
checks:
  - name: Has tokenize
    pattern: "function tokenize("
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.title, "LEXER STRUCTURE VALIDATION");
        assert_eq!(
            config.checks.entries(),
            &[ChecklistEntry::new("Has tokenize", "function tokenize(")]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(Config::parse("checks: [name: a\n").is_err());
        assert!(Config::parse("checks:\n  - name: missing pattern\n").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = Config::parse("check: []\n").unwrap_err();
        assert!(format!("{:#}", err).contains("unknown field `check`"));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_config() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::default().with_overrides(ConfigOverrides {
            input: Some(PathBuf::from("other.lua")),
            output: None,
            title: Some("OTHER".to_string()),
        });
        assert_eq!(config.input, PathBuf::from("other.lua"));
        assert_eq!(config.output, default_output());
        assert_eq!(config.title, "OTHER");
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_discovers_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: DISCOVERED\n").unwrap();

        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.title, "DISCOVERED");
    }

    #[test]
    fn test_resolve_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yml");

        let err = Config::resolve(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
