//! A serde-aware duration field type.
//!
//! Deserializing a [`Seconds`] runs the full parser, so config files and
//! request bodies can say `"1h30m"`, `"PT90M"` or `5400` interchangeably.
//! Serialization always emits the integer.
//!
//! ```
//! use duratypes::Seconds;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Config {
//!     cache_ttl: Seconds,
//!     #[serde(with = "duratypes::seconds::serde_with")]
//!     timeout: i64,
//! }
//!
//! let config: Config =
//!     serde_json::from_str(r#"{"cache_ttl": "5m", "timeout": "PT30S"}"#).unwrap();
//! assert_eq!(config.cache_ttl.as_secs(), 300);
//! assert_eq!(config.timeout, 30);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DurationError;
use crate::formatter::format_duration;
use crate::parser::{parse_duration, parse_float_seconds};

/// A signed whole number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Seconds(pub i64);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0);

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Convert to a [`std::time::Duration`]; `None` when negative.
    pub fn to_std(self) -> Option<std::time::Duration> {
        u64::try_from(self.0)
            .ok()
            .map(std::time::Duration::from_secs)
    }
}

impl From<i64> for Seconds {
    fn from(value: i64) -> Self {
        Seconds(value)
    }
}

impl From<Seconds> for i64 {
    fn from(value: Seconds) -> Self {
        value.0
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl FromStr for Seconds {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s).map(Seconds)
    }
}

impl Serialize for Seconds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Seconds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SecondsVisitor).map(Seconds)
    }
}

struct SecondsVisitor;

impl Visitor<'_> for SecondsVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration string (\"1h30m\", \"PT1H30M\") or a number of seconds")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::custom(format!("duration {value} is out of range")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        parse_float_seconds(value).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        parse_duration(value).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Err(E::custom(DurationError::type_(
            "Duration must be str, int, or float, got null",
            "null",
        )))
    }
}

/// `#[serde(with = "duratypes::seconds::serde_with")]` for plain `i64` fields.
pub mod serde_with {
    use serde::{Deserializer, Serializer};

    use super::SecondsVisitor;

    pub fn serialize<S: Serializer>(seconds: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*seconds)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(SecondsVisitor)
    }
}
