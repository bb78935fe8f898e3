//! Keyword declarations on free functions, through both the runtime declarators and the attribute macros.

use kwdecl::{TypePolicy, TypeRef, keyword, keyword_with, not_keyword};

fn open_browser(url: &str) -> bool {
    !url.is_empty()
}

#[keyword]
fn plain_keyword() -> u8 {
    1
}

#[keyword("Login as ${user}", tags = ["auth", "smoke"])]
pub fn login_as(user: String) -> String {
    user
}

#[keyword(name = "Add Items", types = { count: u32, "label": String })]
fn add_items(count: u32, label: String) -> usize {
    count as usize + label.len()
}

#[keyword(types = [i64, i64])]
fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[keyword(types = None, tags = [])]
fn raw_argument(value: String) -> String {
    value
}

#[not_keyword]
fn helper() {}

#[keyword(name = "Explicit Name")]
#[not_keyword]
fn suppressed_then_declared() {}

#[not_keyword]
#[keyword("Declared First")]
fn declared_then_suppressed() {}

#[keyword(name = "Outer")]
#[keyword(name = "Inner", tags = ["inner"])]
fn declared_twice() {}

#[test]
fn suppression_marker_is_idempotent() {
    let once = not_keyword(open_browser as fn(&str) -> bool);
    let twice = once.clone().not_keyword();
    assert!(once.is_suppressed());
    assert_eq!(once.attrs(), twice.attrs());
    assert!(!once.is_declared());
    assert!((*twice)("https://example.org"));
}

#[test]
fn direct_form_leaves_defaults() {
    let kw = keyword(open_browser as fn(&str) -> bool);
    assert!(kw.is_declared());
    assert!(!kw.is_suppressed());
    assert_eq!(kw.declared_name(), None);
    assert!(kw.tags().is_empty());
    assert_eq!(kw.type_policy(), &TypePolicy::Unspecified);
}

#[test]
fn parameterized_form_sets_exactly_the_supplied_values() {
    let kw = keyword_with()
        .name("Open Browser To")
        .tags(["ui"])
        .types(vec![("url", TypeRef::of::<&str>())])
        .apply(open_browser as fn(&str) -> bool);
    assert_eq!(kw.declared_name(), Some("Open Browser To"));
    assert_eq!(kw.tags(), ["ui"]);
    match kw.type_policy() {
        TypePolicy::ByName(types) => assert_eq!(types.get("url"), Some(&TypeRef::of::<&str>())),
        other => panic!("expected by-name policy, got {other:?}"),
    }
}

#[test]
fn suppression_then_explicit_declaration_keeps_both() {
    let kw = keyword_with()
        .name("Explicit Name")
        .decorate(not_keyword(open_browser as fn(&str) -> bool));
    assert!(kw.is_suppressed());
    assert_eq!(kw.declared_name(), Some("Explicit Name"));
}

#[test]
fn macro_direct_form() {
    let kw = plain_keyword_keyword();
    assert!(kw.is_declared());
    assert_eq!(kw.declared_name(), None);
    assert!(kw.tags().is_empty());
    assert!(kw.type_policy().is_unspecified());
    assert_eq!((*kw)(), plain_keyword());
}

#[test]
fn macro_positional_name_with_embedded_arguments() {
    let kw = login_as_keyword();
    assert_eq!(kw.declared_name(), Some("Login as ${user}"));
    assert!(kwdecl::has_embedded_arguments(kw.declared_name().unwrap_or_default()));
    assert_eq!(kw.tags(), ["auth", "smoke"]);
    assert_eq!((*kw)("admin".to_string()), "admin");
}

#[test]
fn macro_type_policies() {
    match add_items_keyword().type_policy() {
        TypePolicy::ByName(types) => {
            assert_eq!(types.len(), 2);
            assert!(types["count"].is::<u32>());
            assert!(types["label"].is::<String>());
        }
        other => panic!("expected by-name policy, got {other:?}"),
    }

    assert_eq!(
        add_keyword().type_policy(),
        &TypePolicy::ByPosition(vec![TypeRef::of::<i64>(), TypeRef::of::<i64>()])
    );

    let raw = raw_argument_keyword();
    assert!(raw.type_policy().is_disabled());
    assert!(raw.tags().is_empty());
    assert!(raw.is_declared());
}

#[test]
fn macro_suppression_marker() {
    let kw = helper_keyword();
    assert!(kw.is_suppressed());
    assert!(!kw.is_declared());
}

#[test]
fn stacked_macros_combine_in_either_order() {
    let kw = suppressed_then_declared_keyword();
    assert!(kw.is_suppressed());
    assert_eq!(kw.declared_name(), Some("Explicit Name"));

    let kw = declared_then_suppressed_keyword();
    assert!(kw.is_suppressed());
    assert_eq!(kw.declared_name(), Some("Declared First"));
}

#[test]
fn outermost_declaration_wins() {
    let kw = declared_twice_keyword();
    assert_eq!(kw.declared_name(), Some("Outer"));
    assert!(kw.tags().is_empty());
}

#[test]
fn declared_functions_stay_callable() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add_items(2, "ab".to_string()), 4);
    assert_eq!(raw_argument("x".to_string()), "x");
    helper();
    suppressed_then_declared();
    declared_then_suppressed();
    declared_twice();
}
