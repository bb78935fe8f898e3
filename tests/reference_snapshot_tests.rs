//! Snapshot tests for the rendered declaration reference.
//!
//! Run `cargo insta review` to review changes after editing the vocabulary registries.

use kwdecl::reference::{render_json, render_markdown};

fn section<'a>(markdown: &'a str, heading: &str) -> &'a str {
    let start = markdown.find(heading).unwrap_or_else(|| panic!("missing section {heading}"));
    let rest = &markdown[start..];
    let end = rest[heading.len()..]
        .find("\n## ")
        .map_or(rest.len(), |i| i + heading.len());
    rest[..end].trim_end()
}

#[test]
fn scopes_section() {
    let md = render_markdown();
    insta::assert_snapshot!(section(&md, "## Scopes"), @r"
    ## Scopes

    | Value | Aliases | Description |
    |---|---|---|
    | `GLOBAL` |  | One library instance is shared by the whole execution. |
    | `SUITE` | `TEST SUITE`, `TESTSUITE` | A new library instance is created for every suite. |
    | `TEST` | `TEST CASE`, `TESTCASE` | A new library instance is created for every test. |
    | `TASK` |  | Alias of TEST for task-oriented executions. |
    ");
}

#[test]
fn documentation_formats_section() {
    let md = render_markdown();
    insta::assert_snapshot!(section(&md, "## Documentation formats"), @r"
    ## Documentation formats

    | Value | Aliases | Description |
    |---|---|---|
    | `ROBOT` |  | Lightweight built-in markup (`*bold*`, `_italic_`, tables and lists). |
    | `HTML` |  | Documentation is raw HTML. |
    | `TEXT` |  | Documentation is plain text shown as-is. |
    | `REST` |  | reStructuredText, converted to HTML by the documentation renderer. |
    ");
}

#[test]
fn reference_starts_with_contents() {
    let md = render_markdown();
    let head: String = md.lines().take(6).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(head, @r"
    # kwdecl declaration reference

    - [Decorators](#decorators)
    - [Attributes](#attributes)
    - [Scopes](#scopes)
    - [Documentation formats](#documentation-formats)
    ");
}

#[test]
fn json_reference_lists_library_arguments() {
    let json = render_json();
    let library = json["decorators"]
        .as_array()
        .and_then(|d| d.iter().find(|d| d["name"] == "library"))
        .cloned()
        .unwrap();
    insta::assert_snapshot!(library["arguments"].to_string(), @r#"["scope","version","converters","doc_format","listener","auto_keywords","extends"]"#);
}
