//! Error types for engine-side resolution of declared metadata.
//!
//! Declarations themselves never fail: whatever value is declared is stored verbatim. These errors are produced when
//! a consuming engine *reads* the declarations (resolving a scope, running a converter, looking up a library).

use kwdecl_core::lang::attributes::{self, AttributeId};
use miette::Diagnostic;
use thiserror::Error;

/// A declared library configuration value that the consuming engine cannot accept.
///
/// Every variant names the offending attribute, the declared value, and the library it was declared on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("library `{library}` declares invalid scope `{value}`")]
    #[diagnostic(
        code(kwdecl::config::invalid_scope),
        help("valid scopes are GLOBAL, SUITE, TEST and TASK (case-insensitive)")
    )]
    InvalidScope { library: String, value: String },

    #[error("library `{library}` declares invalid documentation format `{value}`")]
    #[diagnostic(
        code(kwdecl::config::invalid_doc_format),
        help("valid documentation formats are ROBOT, HTML, TEXT and REST (case-insensitive)")
    )]
    InvalidDocFormat { library: String, value: String },
}

impl ConfigError {
    /// Name of the attribute that carried the invalid value.
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::InvalidScope { .. } => attributes::as_str(AttributeId::Scope),
            Self::InvalidDocFormat { .. } => attributes::as_str(AttributeId::DocFormat),
        }
    }

    /// Name of the library the invalid value was declared on.
    pub fn library(&self) -> &str {
        match self {
            Self::InvalidScope { library, .. } | Self::InvalidDocFormat { library, .. } => library,
        }
    }
}

/// Failure reported by a converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("converter for `{target}` does not accept {found} input")]
    UnsupportedInput { target: &'static str, found: &'static str },

    #[error("cannot convert `{value}` to `{target}`: {reason}")]
    Invalid {
        target: &'static str,
        value: String,
        reason: String,
    },
}

/// Lookup failure in a [`LibraryRegistry`](crate::LibraryRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("library `{type_name}` is not registered")]
    #[diagnostic(
        code(kwdecl::registry::unknown_library),
        help("declare or register the base library before inheriting from it")
    )]
    UnknownLibrary { type_name: &'static str },
}
