//! Provide the canonical declaration vocabulary shared by the `kwdecl` runtime, its attribute macros, and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains the spellings and metadata that both:
//! - the attribute macros use to recognise declaration arguments at compile time, and
//! - the runtime/engine side uses to resolve declared values (scopes, documentation formats) later on.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no runtime metadata types.
//! - Resolution helpers here never fail loudly; they return `Option` and leave diagnostics to callers.

pub mod lang;
pub mod names;

pub use names::{has_embedded_arguments, natural_keyword_name};
