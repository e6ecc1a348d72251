//! The unit table: every accepted unit spelling and its factor in seconds.
//!
//! Months and years are fixed-length approximations (30 and 365 days). No
//! calendar arithmetic happens anywhere in this crate.

use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// A duration unit with a fixed length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// All units, largest first. This is the order the formatter emits them in.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Length of one unit in seconds.
    pub const fn seconds(self) -> i64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => SECONDS_PER_MINUTE,
            Unit::Hour => SECONDS_PER_HOUR,
            Unit::Day => SECONDS_PER_DAY,
            Unit::Week => SECONDS_PER_WEEK,
            Unit::Month => SECONDS_PER_MONTH,
            Unit::Year => SECONDS_PER_YEAR,
        }
    }

    /// The symbol the formatter renders (`"h"` for hours).
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "mo",
            Unit::Year => "y",
        }
    }

    /// Singular full name.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Every lower-case spelling accepted when parsing. The canonical symbol
    /// comes first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Unit::Second => &["s", "sec", "secs", "second", "seconds"],
            Unit::Minute => &["m", "min", "mins", "minute", "minutes"],
            Unit::Hour => &["h", "hr", "hrs", "hour", "hours"],
            Unit::Day => &["d", "day", "days"],
            Unit::Week => &["w", "wk", "wks", "week", "weeks"],
            Unit::Month => &["mo", "mos", "month", "months"],
            Unit::Year => &["y", "yr", "yrs", "year", "years"],
        }
    }

    /// Resolve a unit spelling, ignoring ASCII case.
    ///
    /// ```
    /// use duratypes::Unit;
    ///
    /// assert_eq!(Unit::from_alias("Hours"), Some(Unit::Hour));
    /// assert_eq!(Unit::from_alias("MO"), Some(Unit::Month));
    /// assert_eq!(Unit::from_alias("ms"), None);
    /// ```
    pub fn from_alias(alias: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| {
            unit.aliases()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(alias))
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by [`Unit::from_str`] for an unrecognized spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duration unit '{0}'")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_alias(s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}
