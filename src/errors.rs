use thiserror::Error;

// Defects raised while comparing two values. A failed match is `Ok(false)`,
// never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LikeError {
    // The topic's type has no comparison strategy (sets, opaque objects)
    #[error("could not compare {expected} and {topic}")]
    UnsupportedType { expected: String, topic: String },

    // Nesting went deeper than `LikeOptions::max_depth`
    #[error("comparison exceeded the maximum nesting depth of {limit}")]
    DepthExceeded { limit: usize },
}

// Errors surfaced by `expect(..)` assertions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    // The predicate returned false; message names both values
    #[error("{message}")]
    Failed { message: String },

    // The comparator itself failed; this is a usage error, not a failed expectation
    #[error(transparent)]
    Comparison(#[from] LikeError),

    #[error("no assertion registered under `{0}`")]
    UnknownAssertion(String),
}

// Type alias for results that use `LikeError` as the error type
pub type Result<T> = std::result::Result<T, LikeError>;
