//! # structcheck - structural validation for source artifacts
//!
//! structcheck loads a text artifact, checks that every snippet in a checklist
//! appears in it verbatim, prints a PASS/FAIL line per check, and writes a
//! summary report to a file.
//!
//! ## Modules
//!
//! - [`checklist`] - Checklist entries and the built-in spell-compiler checklist
//! - [`config`] - Injected configuration (paths, title, checklist)
//! - [`report`] - Check results, the aggregate report, and its rendering
//! - [`validator`] - Load, evaluate, aggregate, and emit
//! - [`output`] - Mode-aware stdout sink
//!
//! ## Example
//!
//! ```
//! use structcheck::checklist::Checklist;
//! use structcheck::validator::{aggregate, evaluate};
//!
//! let text = "local function mergeTables(target, source)\n";
//! let results = evaluate(text, &Checklist::spell_compiler());
//!
//! assert!(results[1].passed);
//! assert!(!aggregate(&results));
//! ```

pub mod checklist;
pub mod config;
pub mod output;
pub mod report;
pub mod validator;

/// Default path constants, relative to the working directory.
pub mod paths {
    /// File checked when no other input is configured: `spellCompiler.lua`
    pub const DEFAULT_INPUT: &str = "spellCompiler.lua";
    /// Report file written when no other output is configured
    pub const DEFAULT_OUTPUT: &str = "compiler_validation_results.txt";
    /// Config file discovered in the working directory: `.structcheck.yml`
    pub const CONFIG_FILE: &str = ".structcheck.yml";
}
