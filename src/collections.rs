use crate::engine::Matcher;
use crate::errors::Result;
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Sequences are alike when each one is a structural subset of the other.
/// Order is ignored and duplicates are not counted.
pub(crate) fn compare_sequence(
    matcher: &Matcher,
    expected: &Value,
    topic: &Value,
    depth: usize,
) -> Result<bool> {
    let (Some(expected), Some(topic)) = (expected.as_sequence(), topic.as_sequence()) else {
        debug!(%expected, %topic, "sequence comparison needs two sequences");
        return Ok(false);
    };
    Ok(subset_match(matcher, expected, topic, depth)?
        && subset_match(matcher, topic, expected, depth)?)
}

// Nested sequences recurse; every other item must be plainly equal to some
// item of `target`.
fn subset_match(matcher: &Matcher, source: &[Value], target: &[Value], depth: usize) -> Result<bool> {
    for item in source {
        let found = if item.is_sequence() {
            let inner = matcher.enter(depth)?;
            let mut found = false;
            for candidate in target.iter().filter(|c| c.is_sequence()) {
                if compare_sequence(matcher, item, candidate, inner)? {
                    found = true;
                    break;
                }
            }
            found
        } else {
            target.contains(item)
        };
        if !found {
            debug!(%item, "no counterpart in sequence");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Mappings are alike when they share a key set and every value pair is alike.
pub(crate) fn compare_mapping(
    matcher: &Matcher,
    expected: &Value,
    topic: &Value,
    depth: usize,
) -> Result<bool> {
    let (Some(expected), Some(topic)) = (expected.as_mapping(), topic.as_mapping()) else {
        debug!(%expected, %topic, "mapping comparison needs two mappings");
        return Ok(false);
    };
    Ok(keys_match(matcher, expected, topic, depth)? && keys_match(matcher, topic, expected, depth)?)
}

// Values of `target` are the topic side of each recursive comparison.
fn keys_match(
    matcher: &Matcher,
    source: &BTreeMap<String, Value>,
    target: &BTreeMap<String, Value>,
    depth: usize,
) -> Result<bool> {
    for (key, value) in source {
        let Some(other) = target.get(key) else {
            debug!(%key, "key missing on one side");
            return Ok(false);
        };
        if !matcher.dispatch(value, other, depth)? {
            debug!(%key, "values are not alike");
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::engine::{is_like, Matcher};
    use crate::errors::LikeError;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn like(expected: serde_json::Value, topic: serde_json::Value) -> bool {
        is_like(&expected.into(), &topic.into()).unwrap()
    }

    #[test]
    fn order_is_ignored_but_both_sides_must_be_covered() {
        assert!(like(json!([1, 2, 3]), json!([3, 2, 1])));
        assert!(!like(json!([1, 2]), json!([1, 2, 3])));
        assert!(!like(json!([1, 2, 3]), json!([1, 2])));
    }

    #[test]
    fn duplicates_are_not_counted() {
        assert!(like(json!([1, 1, 2]), json!([2, 1])));
    }

    #[test]
    fn nested_sequences_recurse() {
        assert!(like(json!([[1, 2]]), json!([[2, 1]])));
        assert!(like(json!([[1, [2, 3]], 4]), json!([4, [[3, 2], 1]])));
        assert!(!like(json!([[1, 2]]), json!([[1, 2, 3]])));
    }

    #[test]
    fn scalar_members_use_plain_equality() {
        assert!(like(json!([1]), json!([1.0])));
        // No text leeway for items inside a sequence
        assert!(!like(json!(["Hello"]), json!(["hello"])));
        // Mappings inside sequences must be plainly equal as well
        assert!(like(json!([{"a": 1}]), json!([{"a": 1.0}])));
        assert!(!like(json!([{"a": [1, 2]}]), json!([{"a": [2, 1]}])));
    }

    #[test]
    fn sequence_against_non_sequence_is_unlike() {
        assert!(!like(json!({"a": 1}), json!(["a"])));
        assert!(!like(json!("ab"), json!(["a", "b"])));
    }

    #[test]
    fn mappings_need_identical_key_sets() {
        assert!(!like(json!({"a": 1}), json!({"a": 1, "b": 2})));
        assert!(!like(json!({"a": 1, "b": 2}), json!({"a": 1})));
        assert!(like(json!({"a": 1, "b": 2}), json!({"b": 2.0, "a": 1})));
    }

    #[test]
    fn mapping_values_get_full_leeway() {
        assert!(like(json!({"a": [1, 2]}), json!({"a": [2, 1]})));
        assert!(like(json!({"a": "Hello World"}), json!({"a": "hello world "})));
        assert!(!like(json!({"a": 1}), json!({"a": "1"})));
    }

    #[test]
    fn unsupported_values_inside_mappings_propagate() {
        let topic = Value::Mapping([("a".to_string(), Value::opaque("<Foo>"))].into());
        let expected = Value::Mapping([("a".to_string(), Value::from(1))].into());
        assert_eq!(
            is_like(&expected, &topic),
            Err(LikeError::UnsupportedType {
                expected: "1".into(),
                topic: "<Foo>".into()
            })
        );
    }

    #[test]
    fn unsupported_scalars_inside_sequences_use_plain_equality() {
        let set = Value::Set(vec![1.into()]);
        let topic = Value::Sequence(vec![set.clone()]);
        let expected = Value::Sequence(vec![set]);
        assert_eq!(is_like(&expected, &topic), Ok(true));
    }

    #[test]
    fn sets_inside_sequences_compare_symmetrically() {
        let set = |items: Vec<i32>| Value::Set(items.into_iter().map(Value::from).collect());
        let full = Value::Sequence(vec![set(vec![1, 2])]);
        let repeated = Value::Sequence(vec![set(vec![1, 1])]);
        assert_eq!(is_like(&full, &repeated), Ok(false));
        assert_eq!(is_like(&repeated, &full), Ok(false));
    }

    #[test]
    fn direct_container_entry_points() {
        let m = Matcher::default();
        let a: Value = json!([1, [2]]).into();
        let b: Value = json!([[2], 1]).into();
        assert_eq!(m.compare_sequence(&a, &b), Ok(true));
        assert_eq!(m.compare_mapping(&a, &b), Ok(false));
    }
}
