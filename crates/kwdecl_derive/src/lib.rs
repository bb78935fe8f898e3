//! Attribute macros for kwdecl keyword and library declarations.
//!
//! These macros are the compile-time spelling of the runtime declarators in `kwdecl`:
//! - `#[not_keyword]`: Marks a free function as excluded from keyword discovery
//! - `#[keyword]`: Declares a free function a keyword, optionally with name, tags and argument types
//! - `#[keywords]`: Records the declarations of every public or explicitly declared method of an impl block
//! - `#[library]`: Implements `kwdecl::Library` for a type
//!
//! Generated code refers to the runtime through `::kwdecl`, so the `kwdecl` crate must be a dependency.

use kwdecl_core::lang::decorators::DecoratorId;
use proc_macro::TokenStream;

mod args;
mod keyword;
mod library;

/// Excludes a free function from automatic keyword discovery.
///
/// The function is kept unchanged and a companion `<fn>_keyword()` returns it wrapped in `kwdecl::Keyword` with
/// `suppressed` set.
///
/// # Example
/// ```ignore
/// #[not_keyword]
/// fn helper() {}
///
/// assert!(helper_keyword().is_suppressed());
/// ```
#[proc_macro_attribute]
pub fn not_keyword(attr: TokenStream, item: TokenStream) -> TokenStream {
    keyword::expand_fn(DecoratorId::NotKeyword, attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declares a free function a keyword.
///
/// `#[keyword]` with no arguments is the direct form. Otherwise accepts a positional name or `name = ..`,
/// `tags = [..]` and `types = None | [Ty, ..] | { arg: Ty, .. }`.
///
/// # Example
/// ```ignore
/// #[keyword("Login as ${user}", tags = ["auth"], types = { user: String })]
/// pub fn login(user: String) {}
///
/// // Generates, next to `login`:
/// pub fn login_keyword() -> ::kwdecl::Keyword<fn(String)> { .. }
/// ```
#[proc_macro_attribute]
pub fn keyword(attr: TokenStream, item: TokenStream) -> TokenStream {
    keyword::expand_fn(DecoratorId::Keyword, attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `kwdecl::KeywordSource` for the self type of an inherent impl block.
///
/// `#[keyword(..)]` and `#[not_keyword]` on methods inside the block are helper attributes here; they are recorded
/// and removed from the emitted impl.
#[proc_macro_attribute]
pub fn keywords(attr: TokenStream, item: TokenStream) -> TokenStream {
    keyword::expand_impl(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `kwdecl::Library` for a struct, enum or union.
///
/// Stacked `#[library(..)]` attributes produce a single impl; each declaration layers over the ones below it.
///
/// # Example
/// ```ignore
/// #[library(scope = "SUITE", version = "1.0", auto_keywords)]
/// struct Browser;
///
/// // Generates:
/// impl ::kwdecl::Library for Browser {
///     fn library_config() -> ::kwdecl::LibraryConfig {
///         ::kwdecl::library_with().scope("SUITE").version("1.0").auto_keywords(true).config()
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn library(attr: TokenStream, item: TokenStream) -> TokenStream {
    library::expand(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
