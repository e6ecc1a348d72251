//! Error types for duration parsing and formatting.

use std::fmt;

use thiserror::Error;

/// Every way a duration can be rejected.
///
/// The enum itself is the umbrella category: match on [`DurationError`] to
/// catch everything, or on [`DurationError::kind`] to branch by category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input is a string that matches no supported grammar, names an
    /// unknown unit, or is a bare number without a unit.
    #[error("Invalid duration format: {message}")]
    Format { message: String, input: String },

    /// The input (or the value handed to the formatter) has an unsupported type.
    #[error("Invalid duration type: {message}")]
    Type { message: String, input: String },

    /// The input has the right type but an unusable value (empty, NaN,
    /// infinite, out of range).
    #[error("Invalid duration value: {message}")]
    Value { message: String, input: String },
}

/// The category of a [`DurationError`], for callers that branch without
/// inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationErrorKind {
    Format,
    Type,
    Value,
}

impl fmt::Display for DurationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DurationErrorKind::Format => "format",
            DurationErrorKind::Type => "type",
            DurationErrorKind::Value => "value",
        })
    }
}

impl DurationError {
    pub(crate) fn format(message: impl Into<String>, input: impl Into<String>) -> Self {
        DurationError::Format {
            message: message.into(),
            input: input.into(),
        }
    }

    pub(crate) fn type_(message: impl Into<String>, input: impl Into<String>) -> Self {
        DurationError::Type {
            message: message.into(),
            input: input.into(),
        }
    }

    pub(crate) fn value(message: impl Into<String>, input: impl Into<String>) -> Self {
        DurationError::Value {
            message: message.into(),
            input: input.into(),
        }
    }

    /// Which category this error belongs to.
    pub fn kind(&self) -> DurationErrorKind {
        match self {
            DurationError::Format { .. } => DurationErrorKind::Format,
            DurationError::Type { .. } => DurationErrorKind::Type,
            DurationError::Value { .. } => DurationErrorKind::Value,
        }
    }

    /// The human-readable explanation, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            DurationError::Format { message, .. }
            | DurationError::Type { message, .. }
            | DurationError::Value { message, .. } => message,
        }
    }

    /// Textual representation of the rejected input.
    pub fn input(&self) -> &str {
        match self {
            DurationError::Format { input, .. }
            | DurationError::Type { input, .. }
            | DurationError::Value { input, .. } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, DurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            DurationError::format("bad", "x").kind(),
            DurationErrorKind::Format
        );
        assert_eq!(DurationError::type_("bad", "x").kind(), DurationErrorKind::Type);
        assert_eq!(DurationError::value("bad", "x").kind(), DurationErrorKind::Value);
    }

    #[test]
    fn test_accessors() {
        let err = DurationError::format("unknown unit 'q'", "5q");
        assert_eq!(err.message(), "unknown unit 'q'");
        assert_eq!(err.input(), "5q");
    }

    #[test]
    fn test_display_carries_category_and_message() {
        let err = DurationError::value("Duration string cannot be empty", "");
        assert_eq!(
            err.to_string(),
            "Invalid duration value: Duration string cannot be empty"
        );
    }
}
