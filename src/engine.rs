use crate::collections;
use crate::comparison::{compare_numeric, compare_temporal_within, compare_text};
use crate::context::LikeOptions;
use crate::errors::{LikeError, Result};
use crate::value::{Category, Value};
use tracing::{trace, warn};

// =========================
// Public API (Matcher)
// =========================

/// Decides whether a topic is "like" an expected value.
///
/// The strategy is picked from the topic's category alone:
///
/// | topic      | comparison                                        |
/// |------------|---------------------------------------------------|
/// | null       | expected must be null                             |
/// | text/bytes | case, whitespace and colour-code insensitive      |
/// | number     | exact `f64` equality                              |
/// | sequence   | order-insensitive, both directions                |
/// | mapping    | same keys, values alike                           |
/// | timestamp  | within `time_threshold` seconds                   |
///
/// Anything else is a [`LikeError::UnsupportedType`].
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: LikeOptions,
}

impl Matcher {
    pub fn new(options: LikeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LikeOptions {
        &self.options
    }

    pub fn matches(&self, expected: &Value, topic: &Value) -> Result<bool> {
        self.dispatch(expected, topic, 0)
    }

    /// Sequence comparison on its own; `expected` must also be a sequence.
    pub fn compare_sequence(&self, expected: &Value, topic: &Value) -> Result<bool> {
        collections::compare_sequence(self, expected, topic, self.enter(0)?)
    }

    /// Mapping comparison on its own; `expected` must also be a mapping.
    pub fn compare_mapping(&self, expected: &Value, topic: &Value) -> Result<bool> {
        collections::compare_mapping(self, expected, topic, self.enter(0)?)
    }

    /// `depth` counts the containers already open around this pair.
    pub(crate) fn dispatch(&self, expected: &Value, topic: &Value, depth: usize) -> Result<bool> {
        let category = topic.category();
        trace!(?category, depth, "dispatching");
        let alike = match category {
            Category::Null => expected.is_null(),
            Category::Text => compare_text(expected, topic),
            Category::Number => compare_numeric(expected, topic),
            Category::Sequence => {
                collections::compare_sequence(self, expected, topic, self.enter(depth)?)?
            }
            Category::Mapping => {
                collections::compare_mapping(self, expected, topic, self.enter(depth)?)?
            }
            Category::Temporal => {
                compare_temporal_within(expected, topic, self.options.time_threshold)
            }
            Category::Unsupported => {
                return Err(LikeError::UnsupportedType {
                    expected: expected.to_string(),
                    topic: topic.to_string(),
                })
            }
        };
        Ok(alike)
    }

    /// Depth for the contents of a container opened at `depth`.
    pub(crate) fn enter(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.options.max_depth {
            warn!(limit = self.options.max_depth, "comparison nested too deeply");
            return Err(LikeError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(next)
    }
}

/// Convenience: compare with default options.
pub fn is_like(expected: &Value, topic: &Value) -> Result<bool> {
    Matcher::default().matches(expected, topic)
}
