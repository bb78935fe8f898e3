//! Shareable metadata for `kwdecl_core::lang` registries.
//!
//! The `kwdecl_core::lang` module is a set of **registry-first** vocabularies: decorators, attributes, scopes and
//! documentation formats. This submodule provides the small, dependency-free metadata types reused across all of
//! them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of argument syntax lives in the macros.
//!
//! ## See also
//! - [`crate::lang::decorators`]
//! - [`crate::lang::scopes`]
//! - [`crate::lang::doc_formats`]

/// Identify the `kwdecl` version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use kwdecl_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use kwdecl_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "#[keyword(tags = [\"smoke\"])]",
///     note: Some("Tagged keyword."),
/// };
/// assert!(ex.code.contains("keyword"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for "registry-first" vocabulary items.
///
/// Every vocabulary shares the same core fields:
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
///
/// Registries that need extra per-item data (e.g. attribute owner and presence rule) wrap this struct in their own
/// info type.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Version every item of the initial vocabulary was introduced in.
pub const INITIAL_VERSION: SinceVersion = "0.1.0";

/// Resolve `name` against a registry, comparing canonical spellings and aliases without regard to ASCII case.
///
/// Used by the value vocabularies (scopes, documentation formats) whose spellings are conventionally upper-case but
/// are accepted in any case by consuming engines.
pub fn find_ignore_ascii_case<Id: Copy>(table: &[LangItemInfo<Id>], name: &str) -> Option<Id> {
    let name = name.trim();
    table
        .iter()
        .find(|item| {
            item.canonical.eq_ignore_ascii_case(name) || item.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        })
        .map(|item| item.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Blue,
    }

    const COLORS: &[LangItemInfo<Color>] = &[
        LangItemInfo {
            id: Color::Red,
            canonical: "RED",
            aliases: &["CRIMSON"],
            description: "Red.",
            since_version: Some(INITIAL_VERSION),
            stability: Stability::Stable,
            examples: &[],
        },
        LangItemInfo {
            id: Color::Blue,
            canonical: "BLUE",
            aliases: &[],
            description: "Blue.",
            since_version: None,
            stability: Stability::Draft,
            examples: &[],
        },
    ];

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        assert_eq!(find_ignore_ascii_case(COLORS, "red"), Some(Color::Red));
        assert_eq!(find_ignore_ascii_case(COLORS, " Blue "), Some(Color::Blue));
        assert_eq!(find_ignore_ascii_case(COLORS, "crimson"), Some(Color::Red));
    }

    #[test]
    fn lookup_misses_unknown_spellings() {
        assert_eq!(find_ignore_ascii_case(COLORS, "green"), None);
        assert_eq!(find_ignore_ascii_case(COLORS, ""), None);
    }
}
