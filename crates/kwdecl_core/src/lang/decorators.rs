//! Decorator vocabulary registry.
//!
//! This module centralizes the declaration attribute spellings and their argument names so the macros and tooling
//! don't need stringly-typed comparisons.

use super::registry::{Example, INITIAL_VERSION, LangItemInfo, Stability};

/// Stable identifier for supported declaration decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorId {
    NotKeyword,
    Keyword,
    Keywords,
    Library,
}

/// Named argument for `#[keyword(name = ...)]`.
pub const KEYWORD_NAME_ARG: &str = "name";

/// Named argument for `#[keyword(tags = [...])]`.
pub const KEYWORD_TAGS_ARG: &str = "tags";

/// Named argument for `#[keyword(types = ...)]`.
pub const KEYWORD_TYPES_ARG: &str = "types";

/// Spelling that disables argument conversion in `#[keyword(types = None)]`.
pub const KEYWORD_TYPES_DISABLED: &str = "None";

/// Named argument for `#[library(scope = ...)]`.
pub const LIBRARY_SCOPE_ARG: &str = "scope";

/// Named argument for `#[library(version = ...)]`.
pub const LIBRARY_VERSION_ARG: &str = "version";

/// Named argument for `#[library(converters = { ... })]`.
pub const LIBRARY_CONVERTERS_ARG: &str = "converters";

/// Named argument for `#[library(doc_format = ...)]`.
pub const LIBRARY_DOC_FORMAT_ARG: &str = "doc_format";

/// Named argument for `#[library(listener = ...)]`.
pub const LIBRARY_LISTENER_ARG: &str = "listener";

/// Named argument for `#[library(auto_keywords = ...)]`.
pub const LIBRARY_AUTO_KEYWORDS_ARG: &str = "auto_keywords";

/// Named argument for `#[library(extends = Base)]`.
pub const LIBRARY_EXTENDS_ARG: &str = "extends";

/// Argument names accepted by `#[keyword(...)]`, in declaration order.
pub const KEYWORD_ARGS: &[&str] = &[KEYWORD_NAME_ARG, KEYWORD_TAGS_ARG, KEYWORD_TYPES_ARG];

/// Argument names accepted by `#[library(...)]`, in declaration order.
pub const LIBRARY_ARGS: &[&str] = &[
    LIBRARY_SCOPE_ARG,
    LIBRARY_VERSION_ARG,
    LIBRARY_CONVERTERS_ARG,
    LIBRARY_DOC_FORMAT_ARG,
    LIBRARY_LISTENER_ARG,
    LIBRARY_AUTO_KEYWORDS_ARG,
    LIBRARY_EXTENDS_ARG,
];

/// Metadata entry for a decorator.
pub type DecoratorInfo = LangItemInfo<DecoratorId>;

/// Registry of supported decorators.
pub const DECORATORS: &[DecoratorInfo] = &[
    info(
        DecoratorId::NotKeyword,
        "not_keyword",
        "Exclude a function or method from automatic keyword discovery.",
        &[Example {
            code: "#[not_keyword]\nfn helper() {}",
            note: None,
        }],
    ),
    info(
        DecoratorId::Keyword,
        "keyword",
        "Declare a function or method a keyword, optionally with a custom name, tags and argument types.",
        &[
            Example {
                code: "#[keyword]\nfn example() {}",
                note: Some("Direct form: all metadata left at defaults."),
            },
            Example {
                code: "#[keyword(\"Login as ${user}\", tags = [\"auth\"])]\nfn login(user: String) {}",
                note: Some("Custom name with embedded arguments."),
            },
            Example {
                code: "#[keyword(types = None)]\nfn raw(value: String) {}",
                note: Some("Disable argument conversion."),
            },
        ],
    ),
    info(
        DecoratorId::Keywords,
        "keywords",
        "Record the keyword metadata of every public or explicitly declared method of an impl block.",
        &[],
    ),
    info(
        DecoratorId::Library,
        "library",
        "Declare library configuration: scope, version, converters, documentation format, listeners and keyword \
         auto-discovery.",
        &[Example {
            code: "#[library(scope = \"GLOBAL\", version = \"3.2\", auto_keywords = true)]\nstruct Settings;",
            note: None,
        }],
    ),
];

/// Resolve a decorator name to its stable id.
pub fn from_str(name: &str) -> Option<DecoratorId> {
    if let Some(info) = DECORATORS.iter().find(|d| d.canonical == name) {
        return Some(info.id);
    }
    DECORATORS
        .iter()
        .find(|d| {
            let aliases: &[&str] = d.aliases;
            aliases.contains(&name)
        })
        .map(|d| d.id)
}

/// Return the canonical spelling for a decorator.
pub fn as_str(id: DecoratorId) -> &'static str {
    info_for(id).canonical
}

/// Return the argument names a decorator accepts.
pub fn arguments(id: DecoratorId) -> &'static [&'static str] {
    match id {
        DecoratorId::Keyword => KEYWORD_ARGS,
        DecoratorId::Library => LIBRARY_ARGS,
        DecoratorId::NotKeyword | DecoratorId::Keywords => &[],
    }
}

/// Return the metadata entry for a decorator.
pub fn info_for(id: DecoratorId) -> &'static DecoratorInfo {
    DECORATORS.iter().find(|d| d.id == id).expect("decorator info missing")
}

const fn info(
    id: DecoratorId,
    canonical: &'static str,
    description: &'static str,
    examples: &'static [Example],
) -> DecoratorInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: Some(INITIAL_VERSION),
        stability: Stability::Stable,
        examples,
    }
}
