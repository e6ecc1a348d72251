//! Duration parsing: strings and numbers into integer seconds.
//!
//! A string is tried against two grammars in order:
//!
//! 1. **ISO 8601** — `[+-]P[nY][nM][nW][nD][T[nH][nM][nS]]`, letters in any case.
//!    Every component may be fractional (`PT1.5H`); time components may carry
//!    their own sign (`PT-90S`).
//! 2. **Compound** — one or more `<number><unit>` groups (`"1h30m"`,
//!    `"2 hours 15 min"`), whitespace optional everywhere.
//!
//! Either grammar accepts one leading sign that negates the whole total.
//! A bare number string such as `"30"` is rejected: seconds as a plain number
//! must be passed as a number, not as text.
//!
//! Each component is converted to seconds and truncated toward zero on its
//! own, then the components are summed.

use tracing::{debug, trace};

use crate::error::{DurationError, Result};
use crate::units::Unit;

const SUPPORTED_FORMATS: &str = "Supported formats: compound ('30s', '5m', '1h30m'), \
     ISO 8601 ('PT30S', 'PT5M', 'PT1H30M'), or numeric seconds (30, 30.5)";

/// Fraction digits kept when converting a decimal component. Keeps
/// `frac * factor` well inside `i128`.
const MAX_FRACTION_DIGITS: usize = 30;

/// ISO 8601 designators for the date part, in the order they must appear.
const ISO_DATE_UNITS: [(u8, Unit); 4] = [
    (b'Y', Unit::Year),
    (b'M', Unit::Month),
    (b'W', Unit::Week),
    (b'D', Unit::Day),
];

/// ISO 8601 designators for the time part, in the order they must appear.
const ISO_TIME_UNITS: [(u8, Unit); 3] = [
    (b'H', Unit::Hour),
    (b'M', Unit::Minute),
    (b'S', Unit::Second),
];

// ── Public entry points ─────────────────────────────────────────────────────

/// Parse a duration string into a signed number of seconds.
///
/// # Errors
///
/// - [`DurationError::Value`] if the string is empty (after trimming) or the
///   total does not fit in an `i64`.
/// - [`DurationError::Format`] if the string matches no grammar, names an
///   unknown unit, or is a number without a unit.
///
/// # Examples
///
/// ```
/// use duratypes::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), 5400);
/// assert_eq!(parse_duration("PT2H30M").unwrap(), 9000);
/// assert_eq!(parse_duration("-2 hours 15 min").unwrap(), -8100);
/// assert!(parse_duration("30").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<i64> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(DurationError::value("Duration string cannot be empty", input));
    }

    debug!(input = raw, "parsing duration string");

    let (negative, body) = split_sign(raw, input)?;

    if let Some(components) = match_iso8601(body) {
        debug!(input = raw, "matched ISO 8601 grammar");
        return total_seconds(&components, negative, input);
    }

    match match_compound(body) {
        Compound::Matched(components) => {
            debug!(input = raw, groups = components.len(), "matched compound grammar");
            total_seconds(&components, negative, input)
        }
        Compound::UnknownUnit(unit) => Err(DurationError::format(
            format!("unknown unit '{unit}' in {input:?}. {SUPPORTED_FORMATS}"),
            input,
        )),
        Compound::MissingUnit => Err(DurationError::format(
            format!(
                "missing unit after number in {input:?}; \
                 pass plain seconds as a number, not a string. {SUPPORTED_FORMATS}"
            ),
            input,
        )),
        Compound::NoMatch => Err(DurationError::format(
            format!("{input:?} is not a recognized duration. {SUPPORTED_FORMATS}"),
            input,
        )),
    }
}

/// Accept an integer number of seconds as-is.
///
/// Exists so integer input has an explicit entry point alongside
/// [`parse_duration`] and [`parse_float_seconds`]; it never fails.
pub fn parse_int_seconds(seconds: i64) -> i64 {
    debug!(seconds, "parsing integer duration");
    seconds
}

/// Truncate a floating-point number of seconds toward zero.
///
/// # Errors
///
/// [`DurationError::Value`] if `seconds` is NaN, infinite, or outside the
/// `i64` range.
///
/// ```
/// use duratypes::parse_float_seconds;
///
/// assert_eq!(parse_float_seconds(30.9).unwrap(), 30);
/// assert_eq!(parse_float_seconds(-30.9).unwrap(), -30);
/// assert!(parse_float_seconds(f64::NAN).is_err());
/// ```
pub fn parse_float_seconds(seconds: f64) -> Result<i64> {
    debug!(seconds, "parsing numeric duration");
    if !seconds.is_finite() {
        return Err(DurationError::value(
            format!("Invalid numeric duration: {seconds}"),
            seconds.to_string(),
        ));
    }
    truncate_f64(seconds).ok_or_else(|| {
        DurationError::value(
            format!("numeric duration {seconds} is out of range"),
            seconds.to_string(),
        )
    })
}

// ── Shared helpers ──────────────────────────────────────────────────────────

/// One `<number><unit>` component recognized by either grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Component<'a> {
    number: Number<'a>,
    unit: Unit,
}

/// An unsigned decimal literal with an optional sign of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Number<'a> {
    negative: bool,
    /// Digits, with `.` and fraction digits when `fractional` is set.
    text: &'a str,
    fractional: bool,
}

impl Number<'_> {
    /// Seconds contributed by `self` units of `unit`, truncated toward zero.
    ///
    /// Computed in integers: `int * factor + (frac * factor) / 10^digits`.
    /// Fraction digits past [`MAX_FRACTION_DIGITS`] are ignored. Returns
    /// `None` when the product does not fit.
    fn seconds(&self, unit: Unit) -> Option<i128> {
        let factor = i128::from(unit.seconds());
        let (int_digits, frac_digits) = self.text.split_once('.').unwrap_or((self.text, ""));

        let mut magnitude = int_digits.parse::<i128>().ok()?.checked_mul(factor)?;
        if self.fractional {
            let frac_digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
            let scale = 10i128.checked_pow(frac_digits.len() as u32)?;
            let frac = frac_digits.parse::<i128>().ok()?;
            magnitude = magnitude.checked_add(frac.checked_mul(factor)? / scale)?;
        }
        Some(if self.negative { -magnitude } else { magnitude })
    }
}

/// Strip one leading `+`/`-`, allowing whitespace between it and the body.
fn split_sign<'a>(raw: &'a str, input: &str) -> Result<(bool, &'a str)> {
    let (negative, rest) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => return Ok((false, raw)),
    };
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(DurationError::format(
            format!("missing duration after sign in {input:?}"),
            input,
        ));
    }
    Ok((negative, rest))
}

/// Sum the components, apply the overall sign, and narrow to `i64`.
fn total_seconds(components: &[Component<'_>], negative: bool, input: &str) -> Result<i64> {
    let out_of_range = || DurationError::value(format!("duration {input:?} is out of range"), input);

    let mut total: i128 = 0;
    for component in components {
        let seconds = component.number.seconds(component.unit).ok_or_else(out_of_range)?;
        trace!(
            value = component.number.text,
            negative = component.number.negative,
            unit = %component.unit,
            seconds = %seconds,
            "parsed component"
        );
        total = total.checked_add(seconds).ok_or_else(out_of_range)?;
    }
    if negative {
        total = total.checked_neg().ok_or_else(out_of_range)?;
    }
    i64::try_from(total).map_err(|_| out_of_range())
}

/// `f64` → `i64`, truncating toward zero, or `None` outside the `i64` range.
fn truncate_f64(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if (-LIMIT..LIMIT).contains(&truncated) {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Read `digits[.digits]` starting at `pos`. Returns the literal and the
/// position after it.
fn scan_unsigned(s: &str, pos: usize) -> Option<(&str, bool, usize)> {
    let bytes = s.as_bytes();
    let start = pos;
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }

    let mut fractional = false;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end == frac_start {
            return None;
        }
        fractional = true;
        end = frac_end;
    }

    Some((&s[start..end], fractional, end))
}

// ── ISO 8601 ────────────────────────────────────────────────────────────────

/// Recognize an ISO 8601 duration body (sign already removed).
///
/// Returns `None` for anything that is not strictly ISO shaped, so the
/// caller can fall through to the compound grammar.
fn match_iso8601(body: &str) -> Option<Vec<Component<'_>>> {
    let bytes = body.as_bytes();
    if !bytes.first()?.eq_ignore_ascii_case(&b'P') {
        return None;
    }

    let mut components = Vec::new();
    let mut pos = match_iso_part(body, 1, &ISO_DATE_UNITS, false, &mut components)?;

    if pos < bytes.len() && bytes[pos].eq_ignore_ascii_case(&b'T') {
        let before = components.len();
        pos = match_iso_part(body, pos + 1, &ISO_TIME_UNITS, true, &mut components)?;
        if components.len() == before {
            // "T" with nothing after it.
            return None;
        }
    }

    if pos != bytes.len() || components.is_empty() {
        return None;
    }
    Some(components)
}

/// Match designated components from `designators`, each at most once and in
/// table order. Stops at the first byte that does not start a component.
/// Per-component signs are accepted only when `signed` is set (time part).
fn match_iso_part<'a>(
    body: &'a str,
    mut pos: usize,
    designators: &[(u8, Unit)],
    signed: bool,
    components: &mut Vec<Component<'a>>,
) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut next_designator = 0;

    while pos < bytes.len() {
        let (negative, number_start) = match bytes[pos] {
            b'-' if signed => (true, pos + 1),
            b'+' if signed => (false, pos + 1),
            b if b.is_ascii_digit() => (false, pos),
            _ => break,
        };
        let (text, fractional, after) = scan_unsigned(body, number_start)?;
        let letter = bytes.get(after)?.to_ascii_uppercase();

        let offset = designators[next_designator..]
            .iter()
            .position(|(designator, _)| *designator == letter)?;
        let (_, unit) = designators[next_designator + offset];
        next_designator += offset + 1;

        components.push(Component {
            number: Number {
                negative,
                text,
                fractional,
            },
            unit,
        });
        pos = after + 1;
    }

    Some(pos)
}

// ── Compound ────────────────────────────────────────────────────────────────

/// Outcome of matching the compound grammar.
#[derive(Debug, PartialEq)]
enum Compound<'a> {
    Matched(Vec<Component<'a>>),
    /// A well-formed group whose unit spelling is not in the unit table.
    UnknownUnit(&'a str),
    /// The expression ends in a number with no unit.
    MissingUnit,
    /// Not compound shaped at all.
    NoMatch,
}

fn match_compound(body: &str) -> Compound<'_> {
    let bytes = body.as_bytes();
    let mut components = Vec::new();
    let mut pos = 0;

    loop {
        pos = skip_whitespace(bytes, pos);
        if pos == bytes.len() {
            break;
        }

        let Some((text, fractional, after_number)) = scan_unsigned(body, pos) else {
            return Compound::NoMatch;
        };

        let unit_start = skip_whitespace(bytes, after_number);
        let mut unit_end = unit_start;
        while unit_end < bytes.len() && bytes[unit_end].is_ascii_alphabetic() {
            unit_end += 1;
        }

        if unit_end == unit_start {
            return if unit_start == bytes.len() {
                Compound::MissingUnit
            } else {
                Compound::NoMatch
            };
        }

        let alias = &body[unit_start..unit_end];
        let Some(unit) = Unit::from_alias(alias) else {
            return Compound::UnknownUnit(alias);
        };

        components.push(Component {
            number: Number {
                negative: false,
                text,
                fractional,
            },
            unit,
        });
        pos = unit_end;
    }

    if components.is_empty() {
        Compound::NoMatch
    } else {
        Compound::Matched(components)
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

// ── Tests ───────────────────────────────────────────────────────────────────
