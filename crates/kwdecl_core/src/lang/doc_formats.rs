//! Library documentation format vocabulary.
//!
//! ## Notes
//! - Canonical spellings are upper-case; [`resolve`] ignores ASCII case like consuming engines do.
//! - No format has aliases: `reST` and `rest` already resolve to `REST` through the case-insensitive lookup.

use super::registry::{self, INITIAL_VERSION, LangItemInfo, Stability};

/// Stable identifier for a documentation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocFormatId {
    Robot,
    Html,
    Text,
    Rest,
}

/// Metadata entry for a documentation format.
pub type DocFormatInfo = LangItemInfo<DocFormatId>;

/// Registry of documentation formats.
pub const DOC_FORMATS: &[DocFormatInfo] = &[
    info(
        DocFormatId::Robot,
        "ROBOT",
        &[],
        "Lightweight built-in markup (`*bold*`, `_italic_`, tables and lists).",
    ),
    info(DocFormatId::Html, "HTML", &[], "Documentation is raw HTML."),
    info(DocFormatId::Text, "TEXT", &[], "Documentation is plain text shown as-is."),
    info(
        DocFormatId::Rest,
        "REST",
        &[],
        "reStructuredText, converted to HTML by the documentation renderer.",
    ),
];

/// Resolve an exact spelling (canonical or alias) to a [`DocFormatId`].
pub fn from_str(name: &str) -> Option<DocFormatId> {
    DOC_FORMATS
        .iter()
        .find(|d| d.canonical == name || d.aliases.contains(&name))
        .map(|d| d.id)
}

/// Resolve a declared documentation format ignoring ASCII case and surrounding whitespace.
pub fn resolve(value: &str) -> Option<DocFormatId> {
    registry::find_ignore_ascii_case(DOC_FORMATS, value)
}

/// Return the canonical spelling for a documentation format.
pub fn as_str(id: DocFormatId) -> &'static str {
    info_for(id).canonical
}

/// Return the canonical spellings of all documentation formats, in registry order.
pub fn canonical_spellings() -> Vec<&'static str> {
    DOC_FORMATS.iter().map(|d| d.canonical).collect()
}

/// Return the metadata entry for a documentation format.
pub fn info_for(id: DocFormatId) -> &'static DocFormatInfo {
    DOC_FORMATS
        .iter()
        .find(|d| d.id == id)
        .expect("doc format info missing")
}

const fn info(
    id: DocFormatId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> DocFormatInfo {
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
