//! Keyword declarations on callables.
//!
//! A Rust function cannot carry extra fields, so a declared callable travels inside a [`Keyword`] wrapper that owns
//! the callable together with its [`KeywordAttrs`]. The wrapper dereferences to the callable: declaring never changes
//! how it is called.
//!
//! There are two declaration primitives:
//!
//! - the suppression marker [`not_keyword`], which excludes a callable from automatic discovery, and
//! - the keyword declarator, used either directly ([`keyword`]) or parameterized ([`keyword_with`]).
//!
//! ```rust
//! use kwdecl::{TypeRef, keyword, keyword_with, not_keyword};
//!
//! fn add(a: i64, b: i64) -> i64 {
//!     a + b
//! }
//!
//! let plain = keyword(add as fn(i64, i64) -> i64);
//! assert_eq!(plain.declared_name(), None);
//! assert_eq!((*plain)(1, 2), 3);
//!
//! let named = keyword_with()
//!     .name("Add Numbers")
//!     .tags(["math"])
//!     .types([TypeRef::of::<i64>(), TypeRef::of::<i64>()])
//!     .apply(add as fn(i64, i64) -> i64);
//! assert_eq!(named.declared_name(), Some("Add Numbers"));
//!
//! let hidden = not_keyword(add as fn(i64, i64) -> i64);
//! assert!(hidden.is_suppressed());
//! ```

use std::fmt;
use std::ops::Deref;

use crate::types::TypePolicy;

static UNSPECIFIED: TypePolicy = TypePolicy::Unspecified;

/// Metadata written by the keyword declarator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDeclaration {
    /// Custom keyword name overriding the natural one.
    pub name: Option<String>,
    /// Keyword tags in declaration order.
    pub tags: Vec<String>,
    pub types: TypePolicy,
}

/// Everything declared about one callable.
///
/// `suppressed` and `declaration` are independent: a callable may be both suppressed and explicitly declared, and the
/// consuming engine decides which one wins (explicit declaration does).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordAttrs {
    /// Set by the suppression marker. Never cleared.
    pub suppressed: bool,
    /// Present once the keyword declarator has run, in either form.
    pub declaration: Option<KeywordDeclaration>,
}

impl KeywordAttrs {
    /// Apply the suppression marker. Idempotent.
    pub fn mark_not_keyword(&mut self) {
        self.suppressed = true;
    }

    /// Return `true` if the keyword declarator has been applied.
    pub fn is_declared(&self) -> bool {
        self.declaration.is_some()
    }

    pub fn declared_name(&self) -> Option<&str> {
        self.declaration.as_ref().and_then(|d| d.name.as_deref())
    }

    /// Declared tags; empty when nothing was declared.
    pub fn tags(&self) -> &[String] {
        match &self.declaration {
            Some(declaration) => &declaration.tags,
            None => &[],
        }
    }

    /// Declared type policy; [`TypePolicy::Unspecified`] when nothing was declared.
    pub fn type_policy(&self) -> &TypePolicy {
        self.declaration.as_ref().map_or(&UNSPECIFIED, |d| &d.types)
    }
}

/// A callable together with its declared keyword metadata.
pub struct Keyword<F> {
    func: F,
    attrs: KeywordAttrs,
}

impl<F> Keyword<F> {
    /// Wrap a callable without declaring anything about it.
    pub fn new(func: F) -> Self {
        Self {
            func,
            attrs: KeywordAttrs::default(),
        }
    }

    /// Wrap a callable with previously collected metadata.
    pub fn from_parts(func: F, attrs: KeywordAttrs) -> Self {
        Self { func, attrs }
    }

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn attrs(&self) -> &KeywordAttrs {
        &self.attrs
    }

    pub fn into_inner(self) -> F {
        self.func
    }

    pub fn into_parts(self) -> (F, KeywordAttrs) {
        (self.func, self.attrs)
    }

    /// Apply the suppression marker to an already wrapped callable.
    pub fn not_keyword(mut self) -> Self {
        self.attrs.mark_not_keyword();
        tracing::trace!(callable = std::any::type_name::<F>(), "marked not a keyword");
        self
    }

    pub fn is_suppressed(&self) -> bool {
        self.attrs.suppressed
    }

    pub fn is_declared(&self) -> bool {
        self.attrs.is_declared()
    }

    pub fn declared_name(&self) -> Option<&str> {
        self.attrs.declared_name()
    }

    pub fn tags(&self) -> &[String] {
        self.attrs.tags()
    }

    pub fn type_policy(&self) -> &TypePolicy {
        self.attrs.type_policy()
    }
}

impl<F> Deref for Keyword<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.func
    }
}

impl<F: Clone> Clone for Keyword<F> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

impl<F> fmt::Debug for Keyword<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyword")
            .field("func", &std::any::type_name::<F>())
            .field("attrs", &self.attrs)
            .finish()
    }
}

/// Exclude a callable from automatic keyword discovery.
///
/// Takes no parameters and cannot fail. Use [`Keyword::not_keyword`] for a callable that is already wrapped.
pub fn not_keyword<F>(func: F) -> Keyword<F> {
    Keyword::new(func).not_keyword()
}

/// Declare a callable a keyword with all metadata left at defaults.
///
/// This is the parameterized form applied without arguments: no custom name, no tags, and
/// [`TypePolicy::Unspecified`].
pub fn keyword<F>(func: F) -> Keyword<F> {
    keyword_with().apply(func)
}

/// Start a parameterized keyword declaration.
pub fn keyword_with() -> KeywordDecorator {
    KeywordDecorator::default()
}

/// Second stage of a parameterized keyword declaration.
///
/// Collects `name`, `tags` and `types`, then writes them onto callables with [`apply`](Self::apply) or
/// [`decorate`](Self::decorate). The same decorator can be applied to any number of callables. Nothing is validated
/// here: embedded-argument names and partial type lists are for the consuming engine to interpret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDecorator {
    declaration: KeywordDeclaration,
}

impl KeywordDecorator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom keyword name. Required by the engine when the name embeds arguments (`${arg}`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.declaration.name = Some(name.into());
        self
    }

    /// Replace the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declaration.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append one tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.declaration.tags.push(tag.into());
        self
    }

    /// Argument types: a name mapping, a positional list, or an explicit [`TypePolicy`].
    pub fn types(mut self, types: impl Into<TypePolicy>) -> Self {
        self.declaration.types = types.into();
        self
    }

    /// Disable argument conversion altogether.
    pub fn no_conversion(self) -> Self {
        self.types(TypePolicy::Disabled)
    }

    /// The declaration this decorator writes.
    pub fn declaration(&self) -> &KeywordDeclaration {
        &self.declaration
    }

    /// Write the declaration into existing metadata, replacing any earlier declaration.
    ///
    /// `suppressed` is left untouched.
    pub fn declare(&self, attrs: &mut KeywordAttrs) {
        tracing::trace!(
            name = self.declaration.name.as_deref(),
            tags = self.declaration.tags.len(),
            types = self.declaration.types.kind(),
            "declared keyword"
        );
        attrs.declaration = Some(self.declaration.clone());
    }

    /// Wrap a callable and declare it.
    pub fn apply<F>(&self, func: F) -> Keyword<F> {
        self.decorate(Keyword::new(func))
    }

    /// Declare an already wrapped callable, keeping its other metadata.
    pub fn decorate<F>(&self, mut keyword: Keyword<F>) -> Keyword<F> {
        self.declare(&mut keyword.attrs);
        keyword
    }
}
