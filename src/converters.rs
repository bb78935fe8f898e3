//! Library-level argument converters and listener references.
//!
//! A converter turns a raw argument value into a value of its target type. Converters come in two shapes: taking the
//! raw value only, or taking the raw value plus the declared target type. [`IntoConverter`] accepts both so a library
//! declaration can take plain functions of either shape.
//!
//! Listeners are opaque to declarations; they are stored as shared `Any` references for the engine to downcast.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::ConversionError;
use crate::types::TypeRef;

/// A dynamically typed argument value.
pub type Value = Box<dyn Any + Send>;

/// Result of running a converter.
pub type ConversionResult = Result<Value, ConversionError>;

/// Converters keyed by their target type.
pub type ConverterMap = BTreeMap<TypeRef, Converter>;

type ValueFn = dyn Fn(Value) -> ConversionResult + Send + Sync;
type ValueAndTypeFn = dyn Fn(Value, TypeRef) -> ConversionResult + Send + Sync;

#[derive(Clone)]
enum ConverterFn {
    Value(Arc<ValueFn>),
    ValueAndType(Arc<ValueAndTypeFn>),
}

/// A shareable argument converter.
#[derive(Clone)]
pub struct Converter {
    inner: ConverterFn,
}

impl Converter {
    /// Converter taking the raw value only.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) -> ConversionResult + Send + Sync + 'static,
    {
        Self {
            inner: ConverterFn::Value(Arc::new(f)),
        }
    }

    /// Converter that also receives the declared target type.
    pub fn with_target<F>(f: F) -> Self
    where
        F: Fn(Value, TypeRef) -> ConversionResult + Send + Sync + 'static,
    {
        Self {
            inner: ConverterFn::ValueAndType(Arc::new(f)),
        }
    }

    /// Converter parsing string input into `T`.
    ///
    /// Accepts `String` and `&'static str` raw values; anything else is reported as
    /// [`ConversionError::UnsupportedInput`].
    pub fn parse<T, E, F>(f: F) -> Self
    where
        T: Any + Send,
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::new(move |value: Value| {
            let target = std::any::type_name::<T>();
            let text = match value.downcast::<String>() {
                Ok(text) => *text,
                Err(value) => match value.downcast::<&'static str>() {
                    Ok(text) => (*text).to_string(),
                    Err(_) => {
                        return Err(ConversionError::UnsupportedInput {
                            target,
                            found: "non-string",
                        });
                    }
                },
            };
            match f(&text) {
                Ok(converted) => Ok(Box::new(converted) as Value),
                Err(err) => Err(ConversionError::Invalid {
                    target,
                    value: text,
                    reason: err.to_string(),
                }),
            }
        })
    }

    /// Return `true` if the converter takes the target type as a second argument.
    pub fn accepts_target(&self) -> bool {
        matches!(self.inner, ConverterFn::ValueAndType(_))
    }

    /// Run the converter.
    pub fn convert(&self, value: Value, target: TypeRef) -> ConversionResult {
        match &self.inner {
            ConverterFn::Value(f) => f(value),
            ConverterFn::ValueAndType(f) => f(value, target),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("accepts_target", &self.accepts_target())
            .finish_non_exhaustive()
    }
}

/// Anything usable as a converter.
///
/// `Args` only disambiguates the two closure shapes and is always inferred.
pub trait IntoConverter<Args> {
    fn into_converter(self) -> Converter;
}

impl IntoConverter<Converter> for Converter {
    fn into_converter(self) -> Converter {
        self
    }
}

impl<F> IntoConverter<(Value,)> for F
where
    F: Fn(Value) -> ConversionResult + Send + Sync + 'static,
{
    fn into_converter(self) -> Converter {
        Converter::new(self)
    }
}

impl<F> IntoConverter<(Value, TypeRef)> for F
where
    F: Fn(Value, TypeRef) -> ConversionResult + Send + Sync + 'static,
{
    fn into_converter(self) -> Converter {
        Converter::with_target(self)
    }
}

/// An opaque listener reference.
pub type Listener = Arc<dyn Any + Send + Sync>;

/// One or more listener references declared by a library.
#[derive(Clone, Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(listener: impl Any + Send + Sync) -> Self {
        Self(vec![Arc::new(listener)])
    }

    pub fn push(&mut self, listener: Listener) {
        self.0.push(listener);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.0.iter()
    }

    /// Return the first listener of type `T`.
    pub fn find<T: Any>(&self) -> Option<&T> {
        self.0.iter().find_map(|l| l.downcast_ref::<T>())
    }
}

impl FromIterator<Listener> for Listeners {
    fn from_iter<I: IntoIterator<Item = Listener>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listeners").field(&self.0.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_upper(value: Value) -> ConversionResult {
        match value.downcast::<String>() {
            Ok(text) => Ok(Box::new(text.to_uppercase())),
            Err(_) => Err(ConversionError::UnsupportedInput {
                target: "String",
                found: "non-string",
            }),
        }
    }

    fn describe_target(_value: Value, target: TypeRef) -> ConversionResult {
        Ok(Box::new(target.short_name().to_string()))
    }

    #[test]
    fn both_converter_shapes_are_accepted() {
        let unary = to_upper.into_converter();
        let binary = describe_target.into_converter();
        assert!(!unary.accepts_target());
        assert!(binary.accepts_target());

        let out = unary
            .convert(Box::new("abc".to_string()), TypeRef::of::<String>())
            .unwrap();
        assert_eq!(*out.downcast::<String>().unwrap(), "ABC");

        let out = binary.convert(Box::new(()), TypeRef::of::<u8>()).unwrap();
        assert_eq!(*out.downcast::<String>().unwrap(), "u8");
    }

    #[test]
    fn parse_converter_reports_invalid_and_unsupported_input() {
        let port = Converter::parse(|s: &str| s.parse::<u16>());

        let out = port.convert(Box::new("8080"), TypeRef::of::<u16>()).unwrap();
        assert_eq!(*out.downcast::<u16>().unwrap(), 8080);

        let err = port
            .convert(Box::new("70000".to_string()), TypeRef::of::<u16>())
            .unwrap_err();
        assert!(matches!(err, ConversionError::Invalid { ref value, .. } if value == "70000"));

        let err = port.convert(Box::new(1u8), TypeRef::of::<u16>()).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedInput { .. }));
    }

    #[test]
    fn listeners_downcast_by_type() {
        struct Recorder(&'static str);

        let listeners: Listeners = [Arc::new(7u32) as Listener, Arc::new(Recorder("audit")) as Listener]
            .into_iter()
            .collect();
        assert_eq!(listeners.len(), 2);
        assert_eq!(listeners.find::<Recorder>().map(|r| r.0), Some("audit"));
        assert_eq!(listeners.find::<u32>(), Some(&7));
        assert!(listeners.find::<String>().is_none());
    }
}
