#![forbid(unsafe_code)]
//! Declarative keyword and library metadata.
//!
//! `kwdecl` lets library authors attach keyword metadata to callables and library configuration to types, so that a
//! test-automation engine can later discover keywords, name them, tag them, convert their arguments and scope the
//! library instances. Declarations only record metadata; interpreting it is the engine's job.
//!
//! There are three declaration primitives:
//!
//! - the suppression marker ([`not_keyword`](fn@not_keyword)),
//! - the keyword declarator ([`keyword`](fn@keyword) / [`keyword_with`]), and
//! - the library declarator ([`library`](fn@library) / [`library_with`]).
//!
//! Each is also available as an attribute macro of the same name, plus `#[keywords]` for collecting method
//! declarations of an `impl` block.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

// Lets macro-generated `::kwdecl::...` paths resolve inside this crate's own tests.
extern crate self as kwdecl;

pub mod cli;
pub mod converters;
pub mod errors;
pub mod keyword;
pub mod library;
pub mod reference;
pub mod registry;
pub mod types;

pub use kwdecl_core;
pub use kwdecl_core::lang::doc_formats::DocFormatId;
pub use kwdecl_core::lang::scopes::ScopeId;
pub use kwdecl_core::{has_embedded_arguments, natural_keyword_name};

pub use converters::{ConversionResult, Converter, ConverterMap, IntoConverter, Listener, Listeners, Value};
pub use errors::{ConfigError, ConversionError, RegistryError};
pub use keyword::{Keyword, KeywordAttrs, KeywordDeclaration, KeywordDecorator, keyword, keyword_with, not_keyword};
pub use library::{
    DocFormatSetting, LibraryConfig, LibraryDecorator, ResolvedSettings, ScopeSetting, library, library_with,
};
pub use registry::{KeywordSource, Library, LibraryRegistry, MethodDecl, RegisteredLibrary};
pub use types::{TypePolicy, TypeRef};

// Attribute macros live in the macro namespace, next to the functions of the same name.
pub use kwdecl_derive::{keyword, keywords, library, not_keyword};
