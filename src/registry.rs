//! Associating declarations with types.
//!
//! [`Library`] and [`KeywordSource`] are the static association: `#[library]` and `#[keywords]` implement them, and
//! the configuration lives with the type. [`LibraryRegistry`] is the dynamic one, keyed by [`TypeId`], for engines
//! that collect configurations themselves or declare libraries at runtime.
//!
//! The crate keeps no global registry; every [`LibraryRegistry`] is owned by whoever builds it.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use kwdecl_core::natural_keyword_name;

use crate::errors::RegistryError;
use crate::keyword::KeywordAttrs;
use crate::library::{LibraryConfig, LibraryDecorator};

/// A type with a statically declared library configuration.
pub trait Library {
    fn library_config() -> LibraryConfig;
}

/// A type whose methods carry keyword declarations.
pub trait KeywordSource {
    /// Every public method plus every method with an explicit keyword declaration or suppression, in source order.
    fn keyword_methods() -> Vec<MethodDecl>;
}

/// Declarations recorded for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Rust identifier of the method, without any `r#` prefix.
    pub ident: &'static str,
    /// Whether the method is `pub`.
    pub public: bool,
    pub attrs: KeywordAttrs,
}

impl MethodDecl {
    pub fn new(ident: &'static str, public: bool, attrs: KeywordAttrs) -> Self {
        Self { ident, public, attrs }
    }

    /// Name derived from the identifier, e.g. `Push Button` for `push_button`.
    pub fn natural_name(&self) -> String {
        natural_keyword_name(self.ident)
    }

    /// Declared name if any, natural name otherwise.
    pub fn keyword_name(&self) -> String {
        match self.attrs.declared_name() {
            Some(name) => name.to_string(),
            None => self.natural_name(),
        }
    }
}

/// A library entry in a [`LibraryRegistry`].
#[derive(Debug, Clone)]
pub struct RegisteredLibrary {
    pub type_name: &'static str,
    pub config: LibraryConfig,
    /// Method declarations, when registered from a [`KeywordSource`].
    pub methods: Option<Vec<MethodDecl>>,
}

/// Library configurations keyed by type identity.
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    entries: HashMap<TypeId, RegisteredLibrary>,
}

impl LibraryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the static configuration of `T`, replacing any earlier entry for `T`.
    #[tracing::instrument(skip_all, fields(library = type_name::<T>()))]
    pub fn register<T: Library + 'static>(&mut self) -> &RegisteredLibrary {
        let entry = RegisteredLibrary {
            type_name: type_name::<T>(),
            config: T::library_config(),
            methods: None,
        };
        self.insert::<T>(entry)
    }

    /// Register the static configuration and method declarations of `T`.
    #[tracing::instrument(skip_all, fields(library = type_name::<T>()))]
    pub fn register_with_keywords<T: Library + KeywordSource + 'static>(&mut self) -> &RegisteredLibrary {
        let methods = T::keyword_methods();
        tracing::debug!(methods = methods.len(), "collected method declarations");
        let entry = RegisteredLibrary {
            type_name: type_name::<T>(),
            config: T::library_config(),
            methods: Some(methods),
        };
        self.insert::<T>(entry)
    }

    /// Apply a declaration to `T`, layering over its current configuration if it has one.
    pub fn declare<T: 'static>(&mut self, decorator: &LibraryDecorator) -> &LibraryConfig {
        let entry = self
            .entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| RegisteredLibrary {
                type_name: type_name::<T>(),
                config: LibraryConfig::default(),
                methods: None,
            });
        entry.config = decorator.layer(Some(&entry.config));
        &entry.config
    }

    /// Fill `T`'s undeclared attributes from `Base`, registering `T` first if needed.
    ///
    /// A newly registered `T` takes `auto_keywords` from `Base` as well; an existing entry keeps its own.
    #[tracing::instrument(skip_all, fields(library = type_name::<T>(), base = type_name::<Base>()))]
    pub fn inherit<T: 'static, Base: 'static>(&mut self) -> Result<&LibraryConfig, RegistryError> {
        let base = self
            .entries
            .get(&TypeId::of::<Base>())
            .map(|entry| entry.config.clone())
            .ok_or(RegistryError::UnknownLibrary {
                type_name: type_name::<Base>(),
            })?;
        let entry = self
            .entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| RegisteredLibrary {
                type_name: type_name::<T>(),
                config: base.clone(),
                methods: None,
            });
        entry.config.inherit_from(&base);
        Ok(&entry.config)
    }

    pub fn get<T: 'static>(&self) -> Option<&LibraryConfig> {
        self.get_by_id(TypeId::of::<T>()).map(|entry| &entry.config)
    }

    pub fn get_by_id(&self, id: TypeId) -> Option<&RegisteredLibrary> {
        self.entries.get(&id)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered libraries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredLibrary> {
        self.entries.values()
    }

    fn insert<T: 'static>(&mut self, entry: RegisteredLibrary) -> &RegisteredLibrary {
        match self.entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(entry),
        }
    }
}
