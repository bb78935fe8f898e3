//! Render the declaration vocabulary as a reference document.
//!
//! The output is derived entirely from the `kwdecl_core::lang` registries: update the registries, not the rendered
//! text.

use kwdecl_core::lang::attributes::{self, AttributeOwner, PresenceRule};
use kwdecl_core::lang::registry::LangItemInfo;
use kwdecl_core::lang::{decorators, doc_formats, scopes};
use serde_json::{Value as Json, json};

/// Render the Markdown reference.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# kwdecl declaration reference\n\n");
    out.push_str("- [Decorators](#decorators)\n");
    out.push_str("- [Attributes](#attributes)\n");
    out.push_str("- [Scopes](#scopes)\n");
    out.push_str("- [Documentation formats](#documentation-formats)\n");

    render_decorators_section(&mut out);
    render_attributes_section(&mut out);
    render_values_section(&mut out, "## Scopes", scopes::SCOPES);
    render_values_section(&mut out, "## Documentation formats", doc_formats::DOC_FORMATS);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Render the reference as JSON.
pub fn render_json() -> Json {
    let decorators: Vec<Json> = decorators::DECORATORS
        .iter()
        .map(|d| {
            json!({
                "name": d.canonical,
                "arguments": decorators::arguments(d.id),
                "description": d.description,
                "since": d.since_version,
            })
        })
        .collect();
    let attributes: Vec<Json> = attributes::ATTRIBUTES
        .iter()
        .map(|a| {
            json!({
                "name": a.item.canonical,
                "owner": owner_str(a.owner),
                "presence": presence_str(a.presence),
                "value": a.value,
                "description": a.item.description,
            })
        })
        .collect();

    json!({
        "decorators": decorators,
        "attributes": attributes,
        "scopes": values_json(scopes::SCOPES),
        "doc_formats": values_json(doc_formats::DOC_FORMATS),
    })
}

fn render_decorators_section(out: &mut String) {
    start_section(out, "## Decorators");
    out.push_str("| Decorator | Arguments | Description |\n");
    out.push_str("|---|---|---|\n");
    for d in decorators::DECORATORS {
        let args = decorators::arguments(d.id)
            .iter()
            .map(|a| format!("`{a}`"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("| `#[{}]` | {} | {} |\n", d.canonical, args, d.description));
    }
}

fn render_attributes_section(out: &mut String) {
    start_section(out, "## Attributes");
    out.push_str("| Attribute | Owner | Value | Presence |\n");
    out.push_str("|---|---|---|---|\n");
    for a in attributes::ATTRIBUTES {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            a.item.canonical,
            owner_str(a.owner),
            a.value,
            presence_str(a.presence)
        ));
    }
}

fn render_values_section<Id>(out: &mut String, heading: &str, table: &[LangItemInfo<Id>]) {
    start_section(out, heading);
    out.push_str("| Value | Aliases | Description |\n");
    out.push_str("|---|---|---|\n");
    for v in table {
        let aliases = v
            .aliases
            .iter()
            .map(|a| format!("`{a}`"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("| `{}` | {} | {} |\n", v.canonical, aliases, v.description));
    }
}

fn values_json<Id>(table: &[LangItemInfo<Id>]) -> Json {
    table
        .iter()
        .map(|v| {
            json!({
                "name": v.canonical,
                "aliases": v.aliases,
                "description": v.description,
            })
        })
        .collect()
}

fn owner_str(owner: AttributeOwner) -> &'static str {
    match owner {
        AttributeOwner::Callable => "callable",
        AttributeOwner::Type => "type",
    }
}

fn presence_str(presence: PresenceRule) -> &'static str {
    match presence {
        PresenceRule::SuppressionMarker => "set by `not_keyword`",
        PresenceRule::KeywordDeclarator => "set by `keyword`",
        PresenceRule::IfSupplied => "only if supplied",
        PresenceRule::Always => "always",
    }
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    while out.ends_with("\n\n\n") {
        out.pop();
    }
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines_to_at_most_two(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
    out.push_str(heading);
    out.push_str("\n\n");
}
