//! Structural "fuzzy equality" for test assertions.
//!
//! `topic` is the observed value, `expected` the reference. They are alike when
//! they are equal under leeway chosen by the topic's type: case, whitespace
//! and colour codes are ignored for text, numbers compare by value, timestamps
//! within a few seconds match, and sequences and mappings are matched
//! recursively without regard to order.
//!
//! ```
//! use like_match::{expect, is_like, Value};
//! use serde_json::json;
//!
//! assert!(is_like(&Value::from("Hello World"), &Value::from("\x1b[31mhello  world\x1b[0m")).unwrap());
//! expect(json!({"a": [1, 2]})).to_be_like(json!({"a": [2, 1]})).unwrap();
//! ```

pub mod assertions; // named assertions behind `expect`
pub mod comparison; // leaf comparators
pub mod context;
pub mod engine;
pub mod errors;
pub mod expect;
pub mod value;
mod collections;

pub use assertions::{Assertion, Registry};
pub use comparison::{compare_numeric, compare_temporal, compare_temporal_within, compare_text, strip_colors};
pub use context::{LikeOptions, DATE_THRESHOLD, DEFAULT_MAX_DEPTH};
pub use engine::{is_like, Matcher};
pub use errors::{AssertionError, LikeError, Result};
pub use expect::{expect, Expectation};
pub use value::{Category, Number, Value};
