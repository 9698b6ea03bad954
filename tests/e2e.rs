use chrono::{Duration, TimeZone, Utc};
use like_match as lm;
use like_match::{LikeError, Value};
use serde_json::json;

fn like(expected: impl Into<Value>, topic: impl Into<Value>) -> lm::Result<bool> {
    lm::is_like(&expected.into(), &topic.into())
}

#[test]
fn test_null_topic() {
    assert_eq!(like((), ()), Ok(true));
    assert_eq!(like(0, ()), Ok(false));
    assert_eq!(like(json!([]), ()), Ok(false));
}

#[test]
fn test_text_ignores_case_whitespace_and_colors() {
    assert_eq!(like("Hello World", "\x1b[31mhello  world\x1b[0m"), Ok(true));
    assert_eq!(like("foo", "bar"), Ok(false));
    assert_eq!(like("", "  \n "), Ok(true));
}

#[test]
fn test_bytes_and_text_mix() {
    assert_eq!(like(b"Some Text", "sometext"), Ok(true));
    assert_eq!(like("sometext", b"SOME TEXT"), Ok(true));
}

#[test]
fn test_numbers_cross_subtype() {
    assert_eq!(like(1, 1.0), Ok(true));
    assert_eq!(like(1, 1.1), Ok(false));
    assert_eq!(like(1, "1"), Ok(false));
    assert_eq!(like("1", 1), Ok(false));
    assert_eq!(like(true, 1), Ok(true));
}

#[test]
fn test_timestamps_within_threshold() {
    let t = Utc.with_ymd_and_hms(2013, 6, 1, 10, 0, 0).unwrap();
    assert_eq!(like(t, t + Duration::milliseconds(4_900)), Ok(true));
    assert_eq!(like(t + Duration::milliseconds(4_900), t), Ok(true));
    assert_eq!(like(t, t + Duration::milliseconds(5_100)), Ok(false));
    assert_eq!(like(t + Duration::milliseconds(5_100), t), Ok(false));
}

#[test]
fn test_sequences() {
    assert_eq!(like(json!([1, 2, 3]), json!([3, 2, 1])), Ok(true));
    assert_eq!(like(json!([1, 2]), json!([1, 2, 3])), Ok(false));
    assert_eq!(like(json!([[1, 2]]), json!([[2, 1]])), Ok(true));
}

#[test]
fn test_mappings() {
    assert_eq!(like(json!({"a": 1}), json!({"a": 1, "b": 2})), Ok(false));
    assert_eq!(like(json!({"a": [1, 2]}), json!({"a": [2, 1]})), Ok(true));
    assert_eq!(
        like(
            json!({"user": {"name": "Ada Lovelace", "tags": ["x", "y"]}}),
            json!({"user": {"name": "ada lovelace\n", "tags": ["y", "x"]}})
        ),
        Ok(true)
    );
}

#[test]
fn test_unsupported_topic_raises() {
    assert_eq!(
        like(json!(null), Value::opaque("<Widget at 0x1>")),
        Err(LikeError::UnsupportedType {
            expected: "None".into(),
            topic: "<Widget at 0x1>".into()
        })
    );
    assert!(like(1, Value::Set(vec![1.into()])).is_err());
}

#[test]
fn test_configurable_threshold() {
    let t = Utc.with_ymd_and_hms(2013, 6, 1, 10, 0, 0).unwrap();
    let strict = lm::Matcher::new(lm::LikeOptions::default().with_time_threshold(1.0));
    let later = Value::from(t + Duration::seconds(2));
    assert_eq!(strict.matches(&t.into(), &later), Ok(false));
    assert_eq!(lm::is_like(&t.into(), &later), Ok(true));
}

#[test]
fn test_json_timestamps() {
    let expected = Value::from_json_with_timestamps(json!({"at": "2024-01-01T00:00:00Z"}));
    let topic = Value::from_json_with_timestamps(json!({"at": "2024-01-01T00:00:03+00:00"}));
    assert_eq!(lm::is_like(&expected, &topic), Ok(true));
}
