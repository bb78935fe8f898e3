//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! The text each command prints is built by a separate pure function so it can be tested.

use kwdecl_core::lang::attributes::{self, AttributeId};
use kwdecl_core::lang::{doc_formats, scopes};
use kwdecl_core::{has_embedded_arguments, natural_keyword_name};

use crate::errors::ConfigError;
use crate::library::library_with;
use crate::reference;

use super::{CliError, CliResult, ExitCode, ReferenceFormat};

/// Print the declaration reference.
pub fn reference(format: ReferenceFormat) -> CliResult<ExitCode> {
    let rendered = match format {
        ReferenceFormat::Markdown => reference::render_markdown(),
        ReferenceFormat::Json => serde_json::to_string_pretty(&reference::render_json())
            .map_err(|e| CliError::failure(format!("Error rendering JSON reference: {e}")))?,
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve declared values and print their canonical spellings.
pub fn resolve(library: &str, scope: Option<&str>, doc_format: Option<&str>) -> CliResult<ExitCode> {
    match resolve_report(library, scope, doc_format) {
        Ok(report) => {
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(attribute = err.attribute(), library = err.library(), "declared value rejected");
            Err(CliError::failure(format!("{:?}", miette::Report::new(err))))
        }
    }
}

/// Print the natural keyword name of an identifier.
pub fn name(ident: &str) -> CliResult<ExitCode> {
    print!("{}", name_report(ident));
    Ok(ExitCode::SUCCESS)
}

/// Build the `resolve` output: one `attribute: VALUE` line per declared attribute.
pub fn resolve_report(library: &str, scope: Option<&str>, doc_format: Option<&str>) -> Result<String, ConfigError> {
    let mut decorator = library_with();
    if let Some(scope) = scope {
        decorator = decorator.scope(scope);
    }
    if let Some(doc_format) = doc_format {
        decorator = decorator.doc_format(doc_format);
    }
    let resolved = decorator.config().resolve(library)?;

    let mut out = String::new();
    if let Some(scope) = resolved.scope {
        out.push_str(&format!(
            "{}: {}\n",
            attributes::as_str(AttributeId::Scope),
            scopes::as_str(scope)
        ));
    }
    if let Some(doc_format) = resolved.doc_format {
        out.push_str(&format!(
            "{}: {}\n",
            attributes::as_str(AttributeId::DocFormat),
            doc_formats::as_str(doc_format)
        ));
    }
    if out.is_empty() {
        out.push_str("nothing declared\n");
    }
    Ok(out)
}

/// Build the `name` output.
pub fn name_report(ident: &str) -> String {
    let name = natural_keyword_name(ident);
    let mut out = format!("{name}\n");
    if has_embedded_arguments(ident) {
        out.push_str("note: embedded arguments require an explicitly declared name\n");
    }
    out
}
