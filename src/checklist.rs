//! Checklist entries and the built-in spell-compiler checklist.
//!
//! A checklist is an ordered list of `(name, pattern)` pairs. Each pattern is a
//! literal substring the target artifact must contain; there is no wildcard or
//! regex interpretation.

use serde::{Deserialize, Serialize};

/// A single required snippet: a human-readable label plus the literal text to find.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistEntry {
    pub name: String,
    pub pattern: String,
}

impl ChecklistEntry {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Ordered sequence of checklist entries.
///
/// Order is preserved for reporting only; it has no effect on the verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Checklist {
    entries: Vec<ChecklistEntry>,
}

impl Checklist {
    pub fn new(entries: Vec<ChecklistEntry>) -> Self {
        Self { entries }
    }

    /// The structure checks applied to `spellCompiler.lua`.
    pub fn spell_compiler() -> Self {
        Self::new(vec![
            ChecklistEntry::new("Has SpellCompiler table", "local SpellCompiler = {}"),
            ChecklistEntry::new(
                "Has mergeTables helper function",
                "local function mergeTables(target, source)",
            ),
            ChecklistEntry::new(
                "Has compileSpell function",
                "function SpellCompiler.compileSpell(spellDef, keywordData)",
            ),
            ChecklistEntry::new(
                "Has debugCompiled function",
                "function SpellCompiler.debugCompiled(compiledSpell)",
            ),
            ChecklistEntry::new("Creates behavior table", "behavior = {}"),
            ChecklistEntry::new("Handles boolean keywords", "type(params) == \"boolean\""),
            ChecklistEntry::new(
                "Executes behaviors",
                "executeAll = function(caster, target, results)",
            ),
            ChecklistEntry::new("Returns compiled spell", "return compiledSpell"),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChecklistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }
}

impl From<Vec<ChecklistEntry>> for Checklist {
    fn from(entries: Vec<ChecklistEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a ChecklistEntry;
    type IntoIter = std::slice::Iter<'a, ChecklistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
