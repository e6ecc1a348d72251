//! Entry points for values whose type is only known at run time.
//!
//! Statically typed callers use [`parse_duration`] or [`parse_float_seconds`]
//! directly. Callers holding loosely typed data (a config value, a JSON
//! field) go through [`parse`] or [`parse_value`], which dispatch on the
//! value's type and reject unsupported types with [`DurationError::Type`].

use serde_json::Value;

use crate::error::{DurationError, Result};
use crate::formatter::format_duration;
use crate::parser::{parse_duration, parse_float_seconds, parse_int_seconds};

/// A duration input: text in any supported grammar, or a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationInput<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(value: &'a str) -> Self {
        DurationInput::Str(value)
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(value: &'a String) -> Self {
        DurationInput::Str(value.as_str())
    }
}

impl From<i64> for DurationInput<'_> {
    fn from(value: i64) -> Self {
        DurationInput::Int(value)
    }
}

impl From<i32> for DurationInput<'_> {
    fn from(value: i32) -> Self {
        DurationInput::Int(i64::from(value))
    }
}

impl From<u32> for DurationInput<'_> {
    fn from(value: u32) -> Self {
        DurationInput::Int(i64::from(value))
    }
}

impl From<f64> for DurationInput<'_> {
    fn from(value: f64) -> Self {
        DurationInput::Float(value)
    }
}

impl From<f32> for DurationInput<'_> {
    fn from(value: f32) -> Self {
        DurationInput::Float(f64::from(value))
    }
}

/// Parse a string or number into seconds.
///
/// ```
/// use duratypes::parse;
///
/// assert_eq!(parse("1h30m").unwrap(), 5400);
/// assert_eq!(parse(30).unwrap(), 30);
/// assert_eq!(parse(30.9).unwrap(), 30);
/// assert!(parse("30").is_err());
/// ```
pub fn parse<'a>(input: impl Into<DurationInput<'a>>) -> Result<i64> {
    match input.into() {
        DurationInput::Str(s) => parse_duration(s),
        DurationInput::Int(n) => Ok(parse_int_seconds(n)),
        DurationInput::Float(f) => parse_float_seconds(f),
    }
}

/// Parse a JSON value into seconds.
///
/// Strings go through the string grammars, numbers are taken as seconds.
///
/// # Errors
///
/// - [`DurationError::Type`] for `null`, booleans, arrays and objects.
/// - [`DurationError::Value`] for numbers outside the `i64` range.
/// - Anything [`parse_duration`] or [`parse_float_seconds`] rejects.
pub fn parse_value(value: &Value) -> Result<i64> {
    match value {
        Value::String(s) => parse_duration(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(parse_int_seconds(i))
            } else if n.is_u64() {
                Err(DurationError::value(
                    format!("numeric duration {n} is out of range"),
                    n.to_string(),
                ))
            } else {
                match n.as_f64() {
                    Some(f) => parse_float_seconds(f),
                    None => Err(DurationError::value(
                        format!("Invalid numeric duration: {n}"),
                        n.to_string(),
                    )),
                }
            }
        }
        other => Err(DurationError::type_(
            format!(
                "Duration must be str, int, or float, got {}",
                json_type_name(other)
            ),
            other.to_string(),
        )),
    }
}

/// Format a JSON value holding integer seconds.
///
/// Formatting is stricter than parsing: only exact integers are accepted.
///
/// # Errors
///
/// [`DurationError::Type`] for floats, strings and every other non-integer
/// value; [`DurationError::Value`] for integers outside the `i64` range.
///
/// ```
/// use duratypes::format_value;
/// use serde_json::json;
///
/// assert_eq!(format_value(&json!(5400)).unwrap(), "1h30m");
/// assert!(format_value(&json!(5400.0)).is_err());
/// ```
pub fn format_value(value: &Value) -> Result<String> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => match n.as_i64() {
            Some(seconds) => Ok(format_duration(seconds)),
            None => Err(DurationError::value(
                format!("seconds value {n} is out of range"),
                n.to_string(),
            )),
        },
        other => Err(DurationError::type_(
            format!("Seconds must be an integer, got {}", json_type_name(other)),
            other.to_string(),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DurationErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_dispatches_on_input_type() {
        assert_eq!(parse("5m").unwrap(), 300);
        assert_eq!(parse(&"5m".to_string()).unwrap(), 300);
        assert_eq!(parse(300i64).unwrap(), 300);
        assert_eq!(parse(300i32).unwrap(), 300);
        assert_eq!(parse(300u32).unwrap(), 300);
        assert_eq!(parse(300.5f64).unwrap(), 300);
        assert_eq!(parse(-0.5f32).unwrap(), 0);
    }

    #[test]
    fn test_string_and_number_thirty_differ() {
        assert_eq!(parse(30).unwrap(), 30);
        assert_eq!(parse("30").unwrap_err().kind(), DurationErrorKind::Format);
    }

    #[test]
    fn test_parse_value_strings_and_numbers() {
        assert_eq!(parse_value(&json!("1h30m")).unwrap(), 5400);
        assert_eq!(parse_value(&json!("PT1H30M")).unwrap(), 5400);
        assert_eq!(parse_value(&json!(45)).unwrap(), 45);
        assert_eq!(parse_value(&json!(-45)).unwrap(), -45);
        assert_eq!(parse_value(&json!(30.9)).unwrap(), 30);
        assert_eq!(parse_value(&json!(-30.9)).unwrap(), -30);
    }

    #[test]
    fn test_parse_value_null_is_type_error() {
        let err = parse_value(&Value::Null).unwrap_err();
        assert_eq!(err.kind(), DurationErrorKind::Type);
        assert!(err.message().contains("got null"), "got: {err}");
        assert_eq!(err.input(), "null");
    }

    #[test]
    fn test_parse_value_other_types() {
        for value in [json!(true), json!([1, 2]), json!({"h": 1})] {
            let err = parse_value(&value).unwrap_err();
            assert_eq!(err.kind(), DurationErrorKind::Type, "value: {value}");
        }
    }

    #[test]
    fn test_parse_value_huge_unsigned() {
        let err = parse_value(&json!(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), DurationErrorKind::Value);
    }

    #[test]
    fn test_parse_value_empty_string() {
        let err = parse_value(&json!("")).unwrap_err();
        assert_eq!(err.kind(), DurationErrorKind::Value);
    }

    #[test]
    fn test_format_value_integers() {
        assert_eq!(format_value(&json!(90)).unwrap(), "1m30s");
        assert_eq!(format_value(&json!(-90)).unwrap(), "-1m30s");
        assert_eq!(format_value(&json!(0)).unwrap(), "0s");
    }

    #[test]
    fn test_format_value_rejects_non_integers() {
        for value in [json!(1.5), json!(90.0), json!("90"), json!(null), json!(false)] {
            let err = format_value(&value).unwrap_err();
            assert_eq!(err.kind(), DurationErrorKind::Type, "value: {value}");
        }
        let err = format_value(&json!(1.5)).unwrap_err();
        assert!(err.message().contains("got float"), "got: {err}");
    }

    #[test]
    fn test_format_value_huge_unsigned() {
        let err = format_value(&json!(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), DurationErrorKind::Value);
    }
}
