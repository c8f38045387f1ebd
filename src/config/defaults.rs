//! Default values used when a config file omits a field.

use std::path::PathBuf;

use crate::checklist::Checklist;
use crate::paths::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Title shown in the report header.
pub const DEFAULT_TITLE: &str = "SPELL COMPILER STRUCTURE VALIDATION";

default_fn!(default_input, PathBuf, PathBuf::from(DEFAULT_INPUT));
default_fn!(default_output, PathBuf, PathBuf::from(DEFAULT_OUTPUT));
default_fn!(default_title, String, DEFAULT_TITLE.to_string());
default_fn!(default_checks, Checklist, Checklist::spell_compiler());
