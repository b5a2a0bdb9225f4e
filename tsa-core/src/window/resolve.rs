use crate::window::duration::parse_duration_ms;
use crate::{TimeWindow, TsaError, WindowConfig};

/// Treat missing and blank tokens the same way.
fn present(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

fn resolve_until(until: Option<&str>, now: i64) -> Result<i64, TsaError> {
    match present(until) {
        None => Ok(now),
        Some(t) if t.eq_ignore_ascii_case("now") => Ok(now),
        Some(t) => {
            let ago = parse_duration_ms(t)?;
            now.checked_sub(ago)
                .ok_or_else(|| TsaError::InvalidArg(format!("until {t:?} is out of range")))
        }
    }
}

/// Numeric step token truncated toward zero; `"60.0"` is 60 and `"1.5"` is 1.
#[allow(clippy::cast_possible_truncation)]
fn parse_step(token: &str) -> Result<i64, TsaError> {
    if let Ok(n) = token.parse::<i64>() {
        return Ok(n);
    }
    match token.parse::<f64>() {
        // saturating cast
        Ok(x) if x.is_finite() => Ok(x.trunc() as i64),
        _ => Err(TsaError::parse(token, "step must be a number")),
    }
}

fn resolve_step(step: Option<&str>, span_ms: i64, cfg: &WindowConfig) -> Result<i64, TsaError> {
    let requested = match present(step) {
        None => 0,
        Some(t) => parse_step(t)?,
    };
    let step = if requested == 0 {
        span_ms / cfg.target_points.max(1)
    } else {
        requested
    };
    Ok(step.max(cfg.min_step).max(WindowConfig::MIN_STEP))
}

/// Resolve since/until/step tokens with the default window constants.
///
/// See [`resolve_with`].
///
/// # Errors
/// Propagates every error from [`resolve_with`].
pub fn resolve(
    since: Option<&str>,
    until: Option<&str>,
    step: Option<&str>,
    now: i64,
) -> Result<TimeWindow, TsaError> {
    resolve_with(&WindowConfig::default(), since, until, step, now)
}

/// Resolve since/until/step tokens into a concrete [`TimeWindow`].
///
/// Semantics:
/// - `until`: missing, blank, or `"now"` (any case) resolves to `now`. Any other
///   value is a duration meaning "that long ago" and resolves to `now - d`.
///   Absolute timestamps are not accepted.
/// - `since`: missing or blank looks back `cfg.default_lookback_ms` from the
///   resolved end. Otherwise it is a duration subtracted from the resolved end.
/// - `step`: a numeric string is truncated toward zero to an integer count;
///   `0`, missing or blank falls back to `(end - start) / cfg.target_points`.
///   The result is floored at `cfg.min_step`, and never below
///   [`WindowConfig::MIN_STEP`] whatever the configuration says.
///
/// ```
/// use tsa_core::resolve;
///
/// let now = 1_700_000_000_000;
/// let w = resolve(Some("10s"), None, None, now).unwrap();
/// assert_eq!((w.start, w.end, w.step), (now - 10_000, now, 30));
/// ```
///
/// # Errors
/// - `TsaError::Parse` when `since`/`until` is not a valid duration or `step`
///   is not numeric. Malformed tokens never fall back to a default.
/// - `TsaError::InvalidArg` when the lookback is zero or negative (the window
///   would be empty or inverted) or the arithmetic leaves the `i64` range.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "tsa_core::window::resolve", skip(cfg), err)
)]
pub fn resolve_with(
    cfg: &WindowConfig,
    since: Option<&str>,
    until: Option<&str>,
    step: Option<&str>,
    now: i64,
) -> Result<TimeWindow, TsaError> {
    let end = resolve_until(until, now)?;

    let lookback = match present(since) {
        None => cfg.default_lookback_ms,
        Some(t) => parse_duration_ms(t)?,
    };
    if lookback <= 0 {
        return Err(TsaError::InvalidArg(format!(
            "since must look back a positive duration, got {lookback}ms"
        )));
    }
    let start = end
        .checked_sub(lookback)
        .ok_or_else(|| TsaError::InvalidArg("window start is out of range".to_string()))?;

    let step = resolve_step(step, end - start, cfg)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(start, end, step, "resolved window");

    Ok(TimeWindow { start, end, step })
}
