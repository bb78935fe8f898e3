//! Property-based tests for declarations
//!
//! These tests use proptest to verify the layering and idempotence rules across many randomly generated
//! declarations.

use kwdecl::{
    ConversionResult, KeywordAttrs, LibraryConfig, LibraryDecorator, TypePolicy, TypeRef, Value, keyword_with,
    library_with, not_keyword,
};
use proptest::prelude::*;

fn identity(value: Value) -> ConversionResult {
    Ok(value)
}

/// Which optional library attributes a declaration supplies.
#[derive(Debug, Clone)]
struct Supplied {
    scope: Option<String>,
    version: Option<String>,
    converters: bool,
    doc_format: Option<String>,
    listeners: Option<usize>,
    auto_keywords: bool,
}

fn supplied_strategy() -> impl Strategy<Value = Supplied> {
    (
        proptest::option::of("[A-Za-z ]{0,12}"),
        proptest::option::of("[0-9]\\.[0-9]"),
        any::<bool>(),
        proptest::option::of("[A-Za-z]{0,8}"),
        proptest::option::of(1usize..4),
        any::<bool>(),
    )
        .prop_map(|(scope, version, converters, doc_format, listeners, auto_keywords)| Supplied {
            scope,
            version,
            converters,
            doc_format,
            listeners,
            auto_keywords,
        })
}

fn decorator(supplied: &Supplied) -> LibraryDecorator {
    let mut decorator = library_with().auto_keywords(supplied.auto_keywords);
    if let Some(scope) = &supplied.scope {
        decorator = decorator.scope(scope.as_str());
    }
    if let Some(version) = &supplied.version {
        decorator = decorator.version(version.as_str());
    }
    if supplied.converters {
        decorator = decorator.converter::<u32, _>(identity);
    }
    if let Some(doc_format) = &supplied.doc_format {
        decorator = decorator.doc_format(doc_format.as_str());
    }
    if let Some(count) = supplied.listeners {
        decorator = decorator.listeners((0..count).map(|i| std::sync::Arc::new(i) as kwdecl::Listener));
    }
    decorator
}

fn scope_of(config: &LibraryConfig) -> Option<&str> {
    config.scope.as_ref().map(|s| s.as_str())
}

fn doc_format_of(config: &LibraryConfig) -> Option<&str> {
    config.doc_format.as_ref().map(|d| d.as_str())
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,6}", 0..4)
}

// =============================================================================
// Library Properties
// =============================================================================

proptest! {
    /// Property: a declaration sets exactly the attributes it was given, and `auto_keywords` always.
    #[test]
    fn declaration_sets_exactly_the_supplied_subset(supplied in supplied_strategy()) {
        let config = decorator(&supplied).config();

        prop_assert_eq!(scope_of(&config), supplied.scope.as_deref());
        prop_assert_eq!(config.version.as_deref(), supplied.version.as_deref());
        prop_assert_eq!(config.converters.is_some(), supplied.converters);
        prop_assert_eq!(doc_format_of(&config), supplied.doc_format.as_deref());
        prop_assert_eq!(config.listeners.as_ref().map(|l| l.len()), supplied.listeners);
        prop_assert_eq!(config.auto_keywords, supplied.auto_keywords);
    }

    /// Property: omitted attributes keep whatever the base configuration had.
    #[test]
    fn omitted_attributes_keep_the_base(base in supplied_strategy(), layer in supplied_strategy()) {
        let base_config = decorator(&base).config();
        let config = decorator(&layer).layer(Some(&base_config));

        prop_assert_eq!(scope_of(&config), layer.scope.as_deref().or(base.scope.as_deref()));
        prop_assert_eq!(
            config.version.as_deref(),
            layer.version.as_deref().or(base.version.as_deref())
        );
        prop_assert_eq!(config.converters.is_some(), layer.converters || base.converters);
        prop_assert_eq!(
            doc_format_of(&config),
            layer.doc_format.as_deref().or(base.doc_format.as_deref())
        );
        prop_assert_eq!(config.listeners.as_ref().map(|l| l.len()), layer.listeners.or(base.listeners));
        prop_assert_eq!(config.auto_keywords, layer.auto_keywords);
    }

    /// Property: applying the same declaration twice equals applying it once.
    #[test]
    fn library_declaration_is_idempotent(base in supplied_strategy(), layer in supplied_strategy()) {
        let base_config = decorator(&base).config();
        let once = decorator(&layer).layer(Some(&base_config));
        let twice = decorator(&layer).layer(Some(&once));

        prop_assert_eq!(once.declared_attributes(), twice.declared_attributes());
        prop_assert_eq!(scope_of(&once), scope_of(&twice));
        prop_assert_eq!(once.version.as_deref(), twice.version.as_deref());
        prop_assert_eq!(once.auto_keywords, twice.auto_keywords);
    }
}

// =============================================================================
// Keyword Properties
// =============================================================================

proptest! {
    /// Property: the suppression marker is idempotent and never touches the declaration.
    #[test]
    fn suppression_is_idempotent(name in proptest::option::of("[A-Za-z ${}]{0,16}"), tags in tags_strategy()) {
        let mut decorator = keyword_with().tags(tags);
        if let Some(name) = name {
            decorator = decorator.name(name);
        }
        let declared = decorator.decorate(not_keyword(|| ()));
        let once = declared.clone().not_keyword();
        let twice = once.clone().not_keyword();

        prop_assert!(once.is_suppressed());
        prop_assert_eq!(once.attrs(), twice.attrs());
        prop_assert_eq!(once.attrs().declaration.as_ref(), declared.attrs().declaration.as_ref());
    }

    /// Property: the keyword declarator records name, tags and types verbatim, and order of tags is kept.
    #[test]
    fn keyword_declaration_is_verbatim(
        name in "[A-Za-z ${}]{0,16}",
        tags in tags_strategy(),
        positional in any::<bool>(),
    ) {
        let types = if positional {
            TypePolicy::by_position([TypeRef::of::<i64>()])
        } else {
            TypePolicy::by_name([("value", TypeRef::of::<String>())])
        };
        let mut attrs = KeywordAttrs::default();
        keyword_with().name(name.clone()).tags(tags.clone()).types(types.clone()).declare(&mut attrs);

        prop_assert_eq!(attrs.declared_name(), Some(name.as_str()));
        prop_assert_eq!(attrs.tags(), tags.as_slice());
        prop_assert_eq!(attrs.type_policy(), &types);
        prop_assert!(!attrs.suppressed);
    }
}
