//! Type references and keyword argument type policies.
//!
//! A [`TypeRef`] names a Rust type by identity so declarations can refer to argument types and converter targets
//! without carrying values of those types around. A [`TypePolicy`] is what a keyword declares about its argument
//! types; interpreting it is left to the argument-conversion engine.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type plus its name for diagnostics.
///
/// Equality, ordering and hashing use the [`TypeId`] only; the name is informational and not guaranteed to be stable
/// across compiler versions.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
}

impl TypeRef {
    /// Reference the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Return the full type name as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the last path segment of a path type name, e.g. `Duration` for `core::time::Duration`.
    ///
    /// Tuples, arrays, slices, references, pointers, fn pointers and trait objects keep their full name.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        if base.contains(['(', '[', '&', '*', ' ']) {
            return self.name;
        }
        match base.rfind("::") {
            Some(idx) => &self.name[idx + 2..],
            None => self.name,
        }
    }

    /// Return `true` if this references the type `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl PartialOrd for TypeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Argument type policy declared by a keyword.
///
/// Specifying types for only some arguments is valid; the conversion engine reconciles the rest with the callable's
/// own signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypePolicy {
    /// Nothing declared: the engine falls back to the callable's own parameter types.
    #[default]
    Unspecified,
    /// No conversion is performed for any argument.
    Disabled,
    /// Types keyed by argument name.
    ByName(BTreeMap<String, TypeRef>),
    /// Types applied to arguments by position.
    ByPosition(Vec<TypeRef>),
}

impl TypePolicy {
    /// Build a [`TypePolicy::ByName`] policy.
    pub fn by_name<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeRef)>,
        S: Into<String>,
    {
        Self::ByName(types.into_iter().map(|(name, ty)| (name.into(), ty)).collect())
    }

    /// Build a [`TypePolicy::ByPosition`] policy.
    pub fn by_position<I>(types: I) -> Self
    where
        I: IntoIterator<Item = TypeRef>,
    {
        Self::ByPosition(types.into_iter().collect())
    }

    /// Short, stable name of the variant, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Disabled => "disabled",
            Self::ByName(_) => "by_name",
            Self::ByPosition(_) => "by_position",
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl From<BTreeMap<String, TypeRef>> for TypePolicy {
    fn from(types: BTreeMap<String, TypeRef>) -> Self {
        Self::ByName(types)
    }
}

impl From<Vec<(&str, TypeRef)>> for TypePolicy {
    fn from(types: Vec<(&str, TypeRef)>) -> Self {
        Self::by_name(types)
    }
}

impl From<Vec<TypeRef>> for TypePolicy {
    fn from(types: Vec<TypeRef>) -> Self {
        Self::ByPosition(types)
    }
}

impl<const N: usize> From<[TypeRef; N]> for TypePolicy {
    fn from(types: [TypeRef; N]) -> Self {
        Self::by_position(types)
    }
}

/// `None` disables conversion, mirroring `#[keyword(types = None)]`.
impl<T: Into<TypePolicy>> From<Option<T>> for TypePolicy {
    fn from(types: Option<T>) -> Self {
        match types {
            Some(types) => types.into(),
            None => Self::Disabled,
        }
    }
}
