//! # duratypes
//!
//! Typed durations for configuration and validation layers.
//!
//! Accepts durations in several textual conventions and normalizes them to a
//! signed integer number of seconds, then formats seconds back into the
//! shortest compound string. Everything is a pure function over immutable
//! data: no I/O, no global state, safe to call from any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use duratypes::{format_duration, parse, parse_duration, DurationErrorKind};
//!
//! assert_eq!(parse_duration("1h30m").unwrap(), 5400);
//! assert_eq!(parse_duration("PT1H30M").unwrap(), 5400);
//! assert_eq!(parse(90.5).unwrap(), 90);
//! assert_eq!(format_duration(5400), "1h30m");
//!
//! // A bare number must be passed as a number, not as text.
//! let err = parse_duration("30").unwrap_err();
//! assert_eq!(err.kind(), DurationErrorKind::Format);
//! ```
//!
//! ## Modules
//!
//! - [`units`] — Unit table: spellings, symbols, factors in seconds
//! - [`parser`] — Compound / ISO 8601 / numeric input → seconds
//! - [`formatter`] — Seconds → compact compound string
//! - [`input`] — Run-time-typed input (`DurationInput`, JSON values)
//! - [`seconds`] — `Seconds` newtype with serde support
//! - [`error`] — Error types

pub mod error;
pub mod formatter;
pub mod input;
pub mod parser;
pub mod seconds;
pub mod units;

pub use error::{DurationError, DurationErrorKind};
pub use formatter::format_duration;
pub use input::{format_value, parse, parse_value, DurationInput};
pub use parser::{parse_duration, parse_float_seconds, parse_int_seconds};
pub use seconds::Seconds;
pub use units::Unit;
