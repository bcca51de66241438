//! Core error types for tgbot.

use thiserror::Error;

/// A request argument failed a precondition.
///
/// Raised while building a request, before anything touches the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeded its maximum length.
    #[error("{field} is {len} characters long, at most {max} allowed")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        len: usize,
    },

    /// A numeric field was outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// Value that was supplied.
        value: f64,
    },

    /// A collection held more items than the remote side accepts.
    #[error("{field} holds {count} items, at most {max} allowed")]
    TooMany {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum item count.
        max: usize,
        /// Actual item count.
        count: usize,
    },

    /// A text field started or ended with whitespace.
    #[error("{field} must not start or end with whitespace")]
    SurroundingWhitespace {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A channel username did not start with `@`.
    #[error("invalid chat username {0:?}, expected the form @channelusername")]
    InvalidUsername(String),

    /// A value could not be converted into its wire representation.
    #[error("failed to serialize {field}: {message}")]
    Serialization {
        /// Name of the offending field.
        field: &'static str,
        /// Underlying serializer message.
        message: String,
    },
}

impl ValidationError {
    /// Fails with [`ValidationError::Empty`] when `value` is empty.
    pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            Err(Self::Empty { field })
        } else {
            Ok(())
        }
    }

    /// Fails with [`ValidationError::SurroundingWhitespace`] when `value` is not trimmed.
    pub fn require_trimmed(field: &'static str, value: &str) -> Result<(), Self> {
        if value.trim() == value {
            Ok(())
        } else {
            Err(Self::SurroundingWhitespace { field })
        }
    }

    /// Fails with [`ValidationError::TooLong`] when `value` has more than `max` characters.
    pub fn require_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), Self> {
        let len = value.chars().count();
        if len > max {
            Err(Self::TooLong { field, max, len })
        } else {
            Ok(())
        }
    }

    /// Fails with [`ValidationError::OutOfRange`] when `value` lies outside `min..=max`.
    pub fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                min,
                max,
                value,
            })
        }
    }
}
