//! Library declarations on types.
//!
//! A Rust type cannot have fields attached to it at runtime, so the library declarator produces an immutable
//! [`LibraryConfig`] that is associated with the type either statically (the [`Library`](crate::Library) trait,
//! usually implemented by `#[library]`) or through an engine-owned [`LibraryRegistry`].
//!
//! ## Layering
//!
//! A declaration only writes what it was given. `scope`, `version`, `converters`, `doc_format` and `listeners` are
//! written when supplied and otherwise keep whatever value the type already had (from a base configuration or an
//! earlier declaration). `auto_keywords` is written by every declaration, defaulting to `false`.
//!
//! ## Validation
//!
//! Scope and documentation format values are stored verbatim, recognized or not. Engines resolve them with
//! [`LibraryConfig::resolve`], which reports unknown values as [`ConfigError`].

use std::any::{Any, type_name};

use kwdecl_core::lang::attributes::{self, AttributeId};
use kwdecl_core::lang::doc_formats::{self, DocFormatId};
use kwdecl_core::lang::scopes::{self, ScopeId};

use crate::converters::{ConverterMap, IntoConverter, Listener, Listeners};
use crate::errors::ConfigError;
use crate::registry::LibraryRegistry;
use crate::types::TypeRef;

/// A declared scope value, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeSetting(String);

impl ScopeSetting {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to a known scope, reporting unknown values against `library`.
    pub fn resolve(&self, library: &str) -> Result<ScopeId, ConfigError> {
        scopes::resolve(&self.0).ok_or_else(|| ConfigError::InvalidScope {
            library: library.to_string(),
            value: self.0.clone(),
        })
    }
}

impl From<&str> for ScopeSetting {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ScopeSetting {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ScopeId> for ScopeSetting {
    fn from(id: ScopeId) -> Self {
        Self(scopes::as_str(id).to_string())
    }
}

/// A declared documentation format value, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocFormatSetting(String);

impl DocFormatSetting {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to a known documentation format, reporting unknown values against `library`.
    pub fn resolve(&self, library: &str) -> Result<DocFormatId, ConfigError> {
        doc_formats::resolve(&self.0).ok_or_else(|| ConfigError::InvalidDocFormat {
            library: library.to_string(),
            value: self.0.clone(),
        })
    }
}

impl From<&str> for DocFormatSetting {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DocFormatSetting {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<DocFormatId> for DocFormatSetting {
    fn from(id: DocFormatId) -> Self {
        Self(doc_formats::as_str(id).to_string())
    }
}

/// Configuration declared for a library type.
///
/// `None` means "not declared: inherit or default", never an explicit empty value.
#[derive(Debug, Clone, Default)]
pub struct LibraryConfig {
    pub scope: Option<ScopeSetting>,
    pub version: Option<String>,
    pub converters: Option<ConverterMap>,
    pub doc_format: Option<DocFormatSetting>,
    pub listeners: Option<Listeners>,
    /// Whether undecorated public methods are keywords. Always written by a declaration.
    pub auto_keywords: bool,
}

/// Scope and documentation format of a [`LibraryConfig`] after engine-side resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub scope: Option<ScopeId>,
    pub doc_format: Option<DocFormatId>,
}

impl LibraryConfig {
    /// Return the converter declared for `T`, if any.
    pub fn converter_for<T: ?Sized + 'static>(&self) -> Option<&crate::converters::Converter> {
        self.converters.as_ref()?.get(&TypeRef::of::<T>())
    }

    /// Resolve the declared scope and documentation format, as a consuming engine must before using them.
    ///
    /// Undeclared values resolve to `None`; unknown values are errors naming `library`.
    pub fn resolve(&self, library: &str) -> Result<ResolvedSettings, ConfigError> {
        let scope = self.scope.as_ref().map(|s| s.resolve(library)).transpose()?;
        let doc_format = self.doc_format.as_ref().map(|d| d.resolve(library)).transpose()?;
        Ok(ResolvedSettings { scope, doc_format })
    }

    /// Fill every undeclared optional attribute from `base`.
    ///
    /// `auto_keywords` is always declared and therefore never taken from `base`.
    pub fn inherit_from(&mut self, base: &LibraryConfig) {
        if self.scope.is_none() {
            self.scope = base.scope.clone();
        }
        if self.version.is_none() {
            self.version = base.version.clone();
        }
        if self.converters.is_none() {
            self.converters = base.converters.clone();
        }
        if self.doc_format.is_none() {
            self.doc_format = base.doc_format.clone();
        }
        if self.listeners.is_none() {
            self.listeners = base.listeners.clone();
        }
    }

    /// Names of the optional attributes that are declared, in attribute-table order.
    pub fn declared_attributes(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.scope.is_some() {
            names.push(attributes::as_str(AttributeId::Scope));
        }
        if self.version.is_some() {
            names.push(attributes::as_str(AttributeId::Version));
        }
        if self.converters.is_some() {
            names.push(attributes::as_str(AttributeId::Converters));
        }
        if self.doc_format.is_some() {
            names.push(attributes::as_str(AttributeId::DocFormat));
        }
        if self.listeners.is_some() {
            names.push(attributes::as_str(AttributeId::Listeners));
        }
        names
    }
}

/// Declare a library with all defaults: nothing but `auto_keywords = false` is written.
pub fn library<T: 'static>(registry: &mut LibraryRegistry) -> &LibraryConfig {
    library_with().apply::<T>(registry)
}

/// Start a parameterized library declaration.
pub fn library_with() -> LibraryDecorator {
    LibraryDecorator::default()
}

/// Second stage of a parameterized library declaration.
#[derive(Debug, Clone, Default)]
pub struct LibraryDecorator {
    scope: Option<ScopeSetting>,
    version: Option<String>,
    converters: Option<ConverterMap>,
    doc_format: Option<DocFormatSetting>,
    listeners: Option<Listeners>,
    auto_keywords: bool,
}

impl LibraryDecorator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library scope, stored verbatim. Accepts a [`ScopeId`] or any string.
    pub fn scope(mut self, scope: impl Into<ScopeSetting>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a converter for target type `T`.
    pub fn converter<T: ?Sized + 'static, Args>(mut self, converter: impl IntoConverter<Args>) -> Self {
        self.converters
            .get_or_insert_with(ConverterMap::new)
            .insert(TypeRef::of::<T>(), converter.into_converter());
        self
    }

    /// Replace the whole converter mapping.
    pub fn converters(mut self, converters: ConverterMap) -> Self {
        self.converters = Some(converters);
        self
    }

    /// Documentation format, stored verbatim. Accepts a [`DocFormatId`] or any string.
    pub fn doc_format(mut self, doc_format: impl Into<DocFormatSetting>) -> Self {
        self.doc_format = Some(doc_format.into());
        self
    }

    /// A single listener.
    pub fn listener(mut self, listener: impl Any + Send + Sync) -> Self {
        self.listeners = Some(Listeners::single(listener));
        self
    }

    /// Several listeners.
    pub fn listeners(mut self, listeners: impl IntoIterator<Item = Listener>) -> Self {
        self.listeners = Some(listeners.into_iter().collect());
        self
    }

    /// Whether undecorated public methods become keywords.
    pub fn auto_keywords(mut self, auto_keywords: bool) -> Self {
        self.auto_keywords = auto_keywords;
        self
    }

    /// Apply this declaration on top of an existing configuration.
    ///
    /// Supplied attributes overwrite `base`; omitted ones keep `base`'s value; `auto_keywords` is always written.
    pub fn layer(&self, base: Option<&LibraryConfig>) -> LibraryConfig {
        let mut config = base.cloned().unwrap_or_default();
        if let Some(scope) = &self.scope {
            config.scope = Some(scope.clone());
        }
        if let Some(version) = &self.version {
            config.version = Some(version.clone());
        }
        if let Some(converters) = &self.converters {
            config.converters = Some(converters.clone());
        }
        if let Some(doc_format) = &self.doc_format {
            config.doc_format = Some(doc_format.clone());
        }
        if let Some(listeners) = &self.listeners {
            config.listeners = Some(listeners.clone());
        }
        config.auto_keywords = self.auto_keywords;
        config
    }

    /// The configuration this declaration produces on its own.
    pub fn config(&self) -> LibraryConfig {
        self.layer(None)
    }

    /// Declare `T` in `registry`, layering over any configuration `T` already has there.
    pub fn apply<'r, T: 'static>(&self, registry: &'r mut LibraryRegistry) -> &'r LibraryConfig {
        tracing::debug!(library = type_name::<T>(), auto_keywords = self.auto_keywords, "declared library");
        registry.declare::<T>(self)
    }
}
