//! Trait definitions for tgbot.
//!
//! [`Sendable`] is the capability every structured request value exposes:
//! conversion into a primitive JSON structure. The dispatcher JSON-encodes
//! such values into a single form field without knowing their concrete type.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// A structured value that travels as JSON text inside one form field.
///
/// Implemented for reply markups, inline query results and input message
/// content. The primitive structure omits every optional field that is unset.
pub trait Sendable {
    /// Converts the value into its primitive nested structure.
    fn to_primitive(&self) -> Result<Value, ValidationError>;
}

/// Shared conversion for `Serialize` types.
pub(crate) fn serialize_primitive<T: Serialize + ?Sized>(
    field: &'static str,
    value: &T,
) -> Result<Value, ValidationError> {
    serde_json::to_value(value).map_err(|e| ValidationError::Serialization {
        field,
        message: e.to_string(),
    })
}

impl<T: Sendable> Sendable for Vec<T> {
    fn to_primitive(&self) -> Result<Value, ValidationError> {
        self.iter()
            .map(Sendable::to_primitive)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: Sendable + ?Sized> Sendable for &T {
    fn to_primitive(&self) -> Result<Value, ValidationError> {
        (**self).to_primitive()
    }
}

/// Implements [`Sendable`] through the type's `Serialize` impl.
macro_rules! impl_sendable {
    ($($ty:ty => $field:literal),+ $(,)?) => {
        $(
            impl $crate::traits::Sendable for $ty {
                fn to_primitive(&self) -> Result<serde_json::Value, $crate::error::ValidationError> {
                    $crate::traits::serialize_primitive($field, self)
                }
            }
        )+
    };
}

pub(crate) use impl_sendable;
