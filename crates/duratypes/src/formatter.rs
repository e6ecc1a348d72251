//! Duration formatting: integer seconds into the compact compound form.

use tracing::debug;

use crate::units::Unit;

/// Render `seconds` as the shortest compound string, largest unit first.
///
/// Zero-valued units are omitted and there are no separators. Zero renders
/// as `"0s"`; negative values get a single leading `-`. The output always
/// parses back to the same value with [`parse_duration`](crate::parse_duration).
///
/// # Examples
///
/// ```
/// use duratypes::format_duration;
///
/// assert_eq!(format_duration(5400), "1h30m");
/// assert_eq!(format_duration(90), "1m30s");
/// assert_eq!(format_duration(0), "0s");
/// assert_eq!(format_duration(-8100), "-2h15m");
/// ```
pub fn format_duration(seconds: i64) -> String {
    debug!(seconds, "formatting duration");

    let mut out = String::new();
    if seconds < 0 {
        out.push('-');
    }

    let mut remaining = seconds.unsigned_abs();
    for unit in Unit::ALL {
        let factor = unit.seconds().unsigned_abs();
        let count = remaining / factor;
        if count != 0 {
            out.push_str(&count.to_string());
            out.push_str(unit.symbol());
            remaining -= count * factor;
        }
    }

    if seconds == 0 {
        out.push_str("0s");
    }

    debug!(seconds, formatted = %out, "formatted duration");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_duration(0), "0s");
    }

    #[test]
    fn test_format_single_units() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(60), "1m");
        assert_eq!(format_duration(3600), "1h");
        assert_eq!(format_duration(86_400), "1d");
        assert_eq!(format_duration(604_800), "1w");
        assert_eq!(format_duration(2_592_000), "1mo");
        assert_eq!(format_duration(31_536_000), "1y");
    }

    #[test]
    fn test_format_mixed() {
        assert_eq!(format_duration(90), "1m30s");
        assert_eq!(format_duration(5400), "1h30m");
        assert_eq!(format_duration(5445), "1h30m45s");
        assert_eq!(format_duration(3601), "1h1s");
        assert_eq!(format_duration(93_600), "1d2h");
    }

    #[test]
    fn test_format_greedy_largest_first() {
        // 35 days = 1 month + 5 days, not 5 weeks
        assert_eq!(format_duration(35 * 86_400), "1mo5d");
        // 366 days = 1 year + 1 day
        assert_eq!(format_duration(366 * 86_400), "1y1d");
        // 14 days stays in weeks
        assert_eq!(format_duration(14 * 86_400), "2w");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_duration(-30), "-30s");
        assert_eq!(format_duration(-5400), "-1h30m");
    }

    #[test]
    fn test_format_extremes() {
        assert!(format_duration(i64::MAX).starts_with("292471208677y"));
        assert!(format_duration(i64::MIN).starts_with("-292471208677y"));
    }
}
