//! Declared attribute vocabulary.
//!
//! This is the boundary contract between declarations and the consuming discovery engine: which attributes a
//! declaration attaches, to which kind of entity, and when they are present at all.
//!
//! ## Notes
//! - Absence of an attribute means "inherit or default", never an explicit false/empty value. The one exception is
//!   [`AttributeId::AutoKeywords`], which every library declaration writes.

use super::registry::{INITIAL_VERSION, LangItemInfo, Stability};

/// Stable identifier for a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeId {
    Suppressed,
    DeclaredName,
    Tags,
    TypePolicy,
    Scope,
    Version,
    Converters,
    DocFormat,
    Listeners,
    AutoKeywords,
}

/// Kind of entity an attribute is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOwner {
    Callable,
    Type,
}

/// When an attribute is present on a declared entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceRule {
    /// Set only by the suppression marker.
    SuppressionMarker,
    /// Set whenever the keyword declarator runs, defaulted when not supplied.
    KeywordDeclarator,
    /// Set only when explicitly supplied to the library declarator.
    IfSupplied,
    /// Written by every library declaration.
    Always,
}

/// Metadata entry for a declared attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeInfo {
    pub item: LangItemInfo<AttributeId>,
    pub owner: AttributeOwner,
    pub presence: PresenceRule,
    /// Human-readable value shape.
    pub value: &'static str,
}

/// Registry of declared attributes, callable attributes first.
pub const ATTRIBUTES: &[AttributeInfo] = &[
    info(
        AttributeId::Suppressed,
        "suppressed",
        "Callable is excluded from automatic keyword discovery.",
        AttributeOwner::Callable,
        PresenceRule::SuppressionMarker,
        "bool",
    ),
    info(
        AttributeId::DeclaredName,
        "name",
        "Custom keyword name overriding the natural one. Required for embedded arguments.",
        AttributeOwner::Callable,
        PresenceRule::KeywordDeclarator,
        "string or absent",
    ),
    info(
        AttributeId::Tags,
        "tags",
        "Keyword tags, order preserved.",
        AttributeOwner::Callable,
        PresenceRule::KeywordDeclarator,
        "ordered string sequence",
    ),
    info(
        AttributeId::TypePolicy,
        "types",
        "Argument type policy: unspecified, disabled, by name or by position.",
        AttributeOwner::Callable,
        PresenceRule::KeywordDeclarator,
        "tagged variant",
    ),
    info(
        AttributeId::Scope,
        "scope",
        "Library instance lifetime.",
        AttributeOwner::Type,
        PresenceRule::IfSupplied,
        "GLOBAL | SUITE | TEST | TASK",
    ),
    info(
        AttributeId::Version,
        "version",
        "Library version.",
        AttributeOwner::Type,
        PresenceRule::IfSupplied,
        "string",
    ),
    info(
        AttributeId::Converters,
        "converters",
        "Custom argument converters keyed by target type.",
        AttributeOwner::Type,
        PresenceRule::IfSupplied,
        "mapping type -> converter",
    ),
    info(
        AttributeId::DocFormat,
        "doc_format",
        "Library documentation format.",
        AttributeOwner::Type,
        PresenceRule::IfSupplied,
        "ROBOT | HTML | TEXT | REST",
    ),
    info(
        AttributeId::Listeners,
        "listeners",
        "Library listener or listeners.",
        AttributeOwner::Type,
        PresenceRule::IfSupplied,
        "opaque reference(s)",
    ),
    info(
        AttributeId::AutoKeywords,
        "auto_keywords",
        "Whether undecorated public methods are keywords.",
        AttributeOwner::Type,
        PresenceRule::Always,
        "bool",
    ),
];

/// Resolve an attribute name to its stable id.
pub fn from_str(name: &str) -> Option<AttributeId> {
    ATTRIBUTES.iter().find(|a| a.item.canonical == name).map(|a| a.item.id)
}

/// Return the canonical spelling for an attribute.
pub fn as_str(id: AttributeId) -> &'static str {
    info_for(id).item.canonical
}

/// Return all attributes attached to the given kind of entity.
pub fn owned_by(owner: AttributeOwner) -> impl Iterator<Item = &'static AttributeInfo> {
    ATTRIBUTES.iter().filter(move |a| a.owner == owner)
}

/// Return the metadata entry for an attribute.
pub fn info_for(id: AttributeId) -> &'static AttributeInfo {
    ATTRIBUTES
        .iter()
        .find(|a| a.item.id == id)
        .expect("attribute info missing")
}

const fn info(
    id: AttributeId,
    canonical: &'static str,
    description: &'static str,
    owner: AttributeOwner,
    presence: PresenceRule,
    value: &'static str,
) -> AttributeInfo {
    AttributeInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            since_version: Some(INITIAL_VERSION),
            stability: Stability::Stable,
            examples: &[],
        },
        owner,
        presence,
        value,
    }
}
