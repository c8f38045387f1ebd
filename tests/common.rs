//! Common test helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Path to the spell-compiler fixture that satisfies every built-in check.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/spellCompiler.lua")
}

#[allow(dead_code)]
pub fn fixture_text() -> String {
    fs::read_to_string(fixture_path()).expect("Failed to read spell compiler fixture")
}

/// Copy the fixture into `dir` under the default input name.
#[allow(dead_code)]
pub fn install_fixture(dir: &Path) -> PathBuf {
    let target = dir.join("spellCompiler.lua");
    fs::copy(fixture_path(), &target).expect("Failed to copy fixture");
    target
}
