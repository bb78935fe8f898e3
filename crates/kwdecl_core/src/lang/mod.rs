//! Declaration vocabulary registries.
//!
//! This module is the "front door" for declaration-level vocabulary: decorator spellings and their argument names,
//! the attributes a declaration attaches, and the value sets for library scopes and documentation formats.
//!
//! The design goal is to avoid stringly-typed checks scattered across the macros, the runtime, and tooling.
//! Callers work with **stable IDs** (e.g. `ScopeId`, `DecoratorId`) and look up spellings/metadata via registry
//! tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - Declaration sites never validate values against these tables; consuming engines do.
//!
//! ## Examples
//! ```rust
//! use kwdecl_core::lang::scopes::{self, ScopeId};
//!
//! assert_eq!(scopes::from_str("SUITE"), Some(ScopeId::Suite));
//! assert_eq!(scopes::as_str(ScopeId::Suite), "SUITE");
//! ```

pub mod attributes;
pub mod decorators;
pub mod doc_formats;
pub mod registry;
pub mod scopes;
