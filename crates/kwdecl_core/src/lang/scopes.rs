//! Library scope vocabulary.
//!
//! A scope is the lifetime policy for a library instance relative to the execution hierarchy.
//!
//! ## Notes
//! - Canonical spellings are upper-case. Lookup via [`from_str`] is case-sensitive on canonical spellings and
//!   aliases; [`resolve`] is the lenient, case-insensitive lookup consuming engines use.
//! - The `TEST SUITE`/`TEST CASE` spellings are legacy aliases still accepted by engines.

use super::registry::{self, INITIAL_VERSION, LangItemInfo, Stability};

/// Stable identifier for a library scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeId {
    Global,
    Suite,
    Test,
    Task,
}

/// Metadata entry for a scope.
pub type ScopeInfo = LangItemInfo<ScopeId>;

/// Registry of library scopes.
pub const SCOPES: &[ScopeInfo] = &[
    info(
        ScopeId::Global,
        "GLOBAL",
        &[],
        "One library instance is shared by the whole execution.",
    ),
    info(
        ScopeId::Suite,
        "SUITE",
        &["TEST SUITE", "TESTSUITE"],
        "A new library instance is created for every suite.",
    ),
    info(
        ScopeId::Test,
        "TEST",
        &["TEST CASE", "TESTCASE"],
        "A new library instance is created for every test.",
    ),
    info(
        ScopeId::Task,
        "TASK",
        &[],
        "Alias of TEST for task-oriented executions.",
    ),
];

/// Resolve an exact spelling (canonical or alias) to a [`ScopeId`].
pub fn from_str(name: &str) -> Option<ScopeId> {
    SCOPES
        .iter()
        .find(|s| s.canonical == name || s.aliases.contains(&name))
        .map(|s| s.id)
}

/// Resolve a declared scope value the way consuming engines do: ignoring ASCII case and surrounding whitespace.
pub fn resolve(value: &str) -> Option<ScopeId> {
    registry::find_ignore_ascii_case(SCOPES, value)
}

/// Return the canonical spelling for a scope.
pub fn as_str(id: ScopeId) -> &'static str {
    info_for(id).canonical
}

/// Return the canonical spellings of all scopes, in registry order.
pub fn canonical_spellings() -> Vec<&'static str> {
    SCOPES.iter().map(|s| s.canonical).collect()
}

/// Return the metadata entry for a scope.
pub fn info_for(id: ScopeId) -> &'static ScopeInfo {
    SCOPES.iter().find(|s| s.id == id).expect("scope info missing")
}

const fn info(
    id: ScopeId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ScopeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        since_version: Some(INITIAL_VERSION),
        stability: Stability::Stable,
        examples: &[],
    }
}
