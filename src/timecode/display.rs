//! Human-facing time formats used next to timecodes.

/// Clock-style position: `H:MM:SS` past the hour mark, otherwise `M:SS`.
///
/// Negative and non-finite input renders as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Millisecond-precise position `MM:SS.mmm`, rounded to the nearest
/// millisecond. Non-finite input renders as `--:--.---`.
pub fn format_precise(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--.---".to_string();
    }
    let total_ms = (seconds * 1000.0).round().max(0.0) as u64;
    let m = total_ms / 60_000;
    let s = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{:02}:{:02}.{:03}", m, s, ms)
}

/// Position as a `t=` link parameter with three decimals.
pub fn format_time_param(seconds: f64) -> Option<String> {
    if seconds.is_finite() {
        Some(format!("{:.3}", seconds))
    } else {
        None
    }
}

/// Parse a `t=` link parameter. Only finite, non-negative values are accepted.
pub fn parse_time_param(text: &str) -> Option<f64> {
    let seconds: f64 = text.trim().parse().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds)
    } else {
        None
    }
}
