//! Dotted-path accessors and mutators over plain records.
//!
//! Paths are given as text and parsed per call; hold a
//! [`DottedPath`](dotjoin_core::path::DottedPath) when the same path is used
//! across many records.

use dotjoin_core::path::DottedPath;
use dotjoin_core::value::Value;

/// Value at `path`, or `None` on any traversal miss.
///
/// ```
/// use dotjoin_core::value::Value;
/// use dotjoin_operators::get;
///
/// let record = Value::from_json_str(r#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
/// assert_eq!(get("a.b.-2", &record), Some(&Value::from(2)));
/// assert_eq!(get("a.b.", &record), None);
/// ```
pub fn get<'a>(path: &str, record: &'a Value) -> Option<&'a Value> {
    DottedPath::parse(path).resolve(record)
}

/// Value at `path`, or `default` when it is absent or `null`.
pub fn get_or(default: Value, path: &str, record: &Value) -> Value {
    get(path, record)
        .and_then(Value::present)
        .cloned()
        .unwrap_or(default)
}

/// Whether the value at `path` deep-equals `expected`.
pub fn equals_at_path(expected: &Value, path: &str, record: &Value) -> bool {
    get(path, record) == Some(expected)
}

/// Predicate form of [`equals_at_path`], for `filter`/`find`.
pub fn path_eq(path: &str, expected: Value) -> impl Fn(&Value) -> bool {
    let path = DottedPath::parse(path);
    move |record| path.resolve(record) == Some(&expected)
}

/// New record with `value` stored at `path`; `record` is left untouched.
pub fn assoc_at_path(path: &str, value: Value, record: &Value) -> Value {
    DottedPath::parse(path).assoc(value, record)
}
