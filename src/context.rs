use serde::{Deserialize, Serialize};

/// Seconds two timestamps may differ by and still be alike.
pub const DATE_THRESHOLD: f64 = 5.0;

/// Nesting depth at which a comparison gives up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikeOptions {
    /// Tolerance in seconds for the temporal comparator (inclusive).
    pub time_threshold: f64,
    /// Maximum number of nested container levels the dispatcher will enter.
    pub max_depth: usize,
}

impl Default for LikeOptions {
    fn default() -> Self {
        Self {
            time_threshold: DATE_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LikeOptions {
    pub fn with_time_threshold(mut self, seconds: f64) -> Self {
        self.time_threshold = seconds;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_keep_five_second_window() {
        let opts = LikeOptions::default();
        assert_eq!(opts.time_threshold, 5.0);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn partial_options_deserialize_with_defaults() {
        let opts: LikeOptions = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(opts, LikeOptions::default().with_max_depth(4));
    }
}
