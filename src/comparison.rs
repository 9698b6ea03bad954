use crate::context::DATE_THRESHOLD;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

// ESC (written \033 or \x1b) or ETX, then `[`, an optional SGR code and `m`
static REMOVE_COLORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\x1b|\x03)\[[0-9]*m").expect("colour pattern compiles"));

/// Remove ANSI colour codes such as `\x1b[31m` and `\x1b[0m`.
pub fn strip_colors(s: &str) -> Cow<'_, str> {
    REMOVE_COLORS.replace_all(s, "")
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '\n'], "")
}

/// Text comparison ignoring colour codes, case, spaces and newlines.
///
/// Bytes are decoded as UTF-8. A side that is not text, or bytes that do not
/// decode, make the pair unlike.
pub fn compare_text(expected: &Value, topic: &Value) -> bool {
    let (Some(expected), Some(topic)) = (expected.as_text(), topic.as_text()) else {
        debug!(%expected, %topic, "text comparison needs two decodable strings");
        return false;
    };
    normalize(&strip_colors(&expected)) == normalize(&strip_colors(&topic))
}

/// Numbers are alike when their `f64` values are exactly equal.
pub fn compare_numeric(expected: &Value, topic: &Value) -> bool {
    match (expected.as_f64(), topic.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => {
            debug!(%expected, %topic, "numeric comparison needs two numbers");
            false
        }
    }
}

/// Timestamps within the default five second window.
pub fn compare_temporal(expected: &Value, topic: &Value) -> bool {
    compare_temporal_within(expected, topic, DATE_THRESHOLD)
}

/// Timestamps whose distance is at most `threshold` seconds, either direction.
pub fn compare_temporal_within(expected: &Value, topic: &Value, threshold: f64) -> bool {
    let (Some(expected), Some(topic)) = (expected.as_timestamp(), topic.as_timestamp()) else {
        debug!(%expected, %topic, "temporal comparison needs two timestamps");
        return false;
    };
    let delta = *topic - *expected;
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    seconds.abs() <= threshold
}
