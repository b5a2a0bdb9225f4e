use crate::TsaError;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
// 4.35 weeks
const MONTH: f64 = 30.45 * DAY;
const YEAR: f64 = 365.25 * DAY;

/// Milliseconds per unit for every accepted unit spelling (lowercase).
fn unit_ms(unit: &str) -> Option<f64> {
    let ms = match unit {
        "ms" | "msec" | "msecs" | "milli" | "millis" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "wk" | "wks" | "week" | "weeks" => WEEK,
        "mo" | "mon" | "mth" | "mths" | "month" | "months" => MONTH,
        "y" | "yr" | "yrs" | "year" | "years" => YEAR,
        _ => return None,
    };
    Some(ms)
}

/// Parse a human duration string into whole milliseconds.
///
/// The input is a sequence of `<number><unit>` terms. Terms may be separated
/// by whitespace or commas, the number may carry a sign and a fractional part,
/// and whitespace is allowed between a number and its unit. Matching is
/// case-insensitive. The result is rounded to the nearest millisecond.
///
/// ```
/// use tsa_core::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms("2 hours").unwrap(), 7_200_000);
/// assert_eq!(parse_duration_ms("1h30m").unwrap(), 5_400_000);
/// assert_eq!(parse_duration_ms("1.5s").unwrap(), 1_500);
/// assert!(parse_duration_ms("not-a-duration").is_err());
/// ```
///
/// # Errors
/// Returns `TsaError::Parse` when the input is empty, a term has no number or
/// no unit, a unit is unknown, or the total does not fit in an `i64`.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_duration_ms(input: &str) -> Result<i64, TsaError> {
    let lowered = input.trim().to_ascii_lowercase();
    let bytes = lowered.as_bytes();
    let mut pos = 0usize;
    let mut total = 0.0f64;
    let mut terms = 0usize;

    loop {
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b',') {
            pos += 1;
        }
        if pos == bytes.len() {
            break;
        }

        let num_start = pos;
        if bytes[pos] == b'+' || bytes[pos] == b'-' {
            pos += 1;
        }
        while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
            pos += 1;
        }
        let number = &lowered[num_start..pos];
        let value: f64 = number
            .parse()
            .map_err(|_| TsaError::parse(input, format!("expected a number at {number:?}")))?;

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let unit_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let unit = &lowered[unit_start..pos];
        if unit.is_empty() {
            return Err(TsaError::parse(input, format!("missing unit after {number}")));
        }
        let per_unit = unit_ms(unit)
            .ok_or_else(|| TsaError::parse(input, format!("unsupported unit {unit:?}")))?;

        total += value * per_unit;
        terms += 1;
    }

    if terms == 0 {
        return Err(TsaError::parse(input, "empty duration"));
    }
    let rounded = total.round();
    // i64::MAX is not representable; stay strictly inside
    if !rounded.is_finite() || rounded.abs() >= 9.0e18 {
        return Err(TsaError::parse(input, "duration out of range"));
    }
    Ok(rounded as i64)
}
