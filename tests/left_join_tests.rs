//! Left join tests (eager helpers, stages, duplicate-key policy)

mod test_data_gen;

use dotjoin_core::config::{DuplicateKeys, JoinConfig};
use dotjoin_core::value::Value;
use dotjoin_operators::pipeline;
use dotjoin_operators::{
    get, left_join, left_join_assoc, left_join_replace, left_join_with_config, map, run_pipeline,
    LeftJoin, LeftJoinAssoc, OpError, StageExt,
};
use serde_json::json;
use test_data_gen::{generate_customers, generate_orders, records, value};

fn collection() -> Vec<Value> {
    records(json!([
        {"a": "a", "b": 2},
        {"a": "b", "b": 3},
        {"a": "c", "b": 4},
    ]))
}

fn joined_collection() -> Vec<Value> {
    records(json!([
        {"id": "a", "b": 2},
        {"id": "c", "b": 5},
    ]))
}

#[test]
fn test_left_join_pairs() {
    let left = collection();
    let right = joined_collection();

    let result = left_join("id", &right, "a", &left);

    assert_eq!(
        result,
        vec![
            (left[0].clone(), Some(right[0].clone())),
            (left[1].clone(), None),
            (left[2].clone(), Some(right[1].clone())),
        ]
    );
}

#[test]
fn test_left_join_keeps_every_left_element() {
    let left = generate_orders(50, 7);
    let right = generate_customers(5);

    let result = left_join("id", &right, "customer.ref", &left);

    assert_eq!(result.len(), left.len());
    for (i, (l, matched)) in result.iter().enumerate() {
        assert!(l.ptr_eq(&left[i]));
        let expected = (i % 7 < 5).then(|| right[i % 7].clone());
        assert_eq!(matched, &expected, "order {i}");
    }
}

#[test]
fn test_left_join_empty_sides() {
    let left = collection();
    let none: Vec<Value> = Vec::new();

    let unmatched = left_join("id", &none, "a", &left);
    assert!(unmatched.iter().all(|(_, m)| m.is_none()));
    assert_eq!(unmatched.len(), 3);

    assert!(left_join("id", &joined_collection(), "a", &none).is_empty());
}

#[test]
fn test_left_join_with_paths() {
    let left = records(json!([{"a": {"derp": "a"}, "b": 2}]));
    let right = records(json!([{"herp": {"id": "a"}, "c": 2}]));

    let result = left_join_replace("a.derp", "herp.id", &right, &left);

    assert_eq!(
        result,
        vec![value(json!({"a": {"derp": {"c": 2, "herp": {"id": "a"}}}, "b": 2}))]
    );
}

#[test]
fn test_left_join_replace_uses_key_field() {
    let result = left_join_replace("a", "id", &joined_collection(), &collection());

    assert_eq!(
        result,
        records(json!([
            {"a": {"id": "a", "b": 2}, "b": 2},
            {"a": null, "b": 3},
            {"a": {"id": "c", "b": 5}, "b": 4},
        ]))
    );
}

#[test]
fn test_left_join_assoc_result_path() {
    let left = records(json!([{"a": "a", "b": 2}]));
    let right = records(json!([{"id": "a", "c": 2}]));

    let result = left_join_assoc("a", "id", "derp", &right, &left);

    assert_eq!(result, vec![value(json!({"a": "a", "derp": {"id": "a", "c": 2}, "b": 2}))]);
    assert_eq!(left[0], value(json!({"a": "a", "b": 2})));
}

#[test]
fn test_left_join_assoc_nested_result_path() {
    let left = records(json!([{"k": 1, "meta": {"seen": true}}]));
    let right = records(json!([{"id": 1, "v": "one"}]));

    let result = left_join_assoc("k", "id", "meta.joined.row", &right, &left);

    assert_eq!(
        result,
        vec![value(json!({"k": 1, "meta": {"seen": true, "joined": {"row": {"id": 1, "v": "one"}}}}))]
    );
}

#[test]
fn test_right_duplicates_last_write_wins() {
    let left = records(json!([{"a": "x"}]));
    let right = records(json!([{"id": "x", "n": 1}, {"id": "x", "n": 2}]));

    let result = left_join("id", &right, "a", &left);
    assert_eq!(result[0].1, Some(right[1].clone()));

    let join = LeftJoin::new("id", &right, "a");
    assert_eq!(join.lookup().stats().duplicates, 1);
}

#[test]
fn test_right_duplicates_rejected_by_config() {
    let left = records(json!([{"a": "x"}]));
    let right = records(json!([{"id": "x", "n": 1}, {"id": "x", "n": 2}]));
    let config = JoinConfig::default().with_duplicate_keys(DuplicateKeys::Reject);

    let err = left_join_with_config("id", &right, "a", &left, &config).expect_err("duplicate");
    assert!(matches!(err, OpError::DuplicateKey { ref key } if key == "x"));
    assert!(LeftJoinAssoc::with_config("a", "id", "out", &right, &config).is_err());

    let unique = records(json!([{"id": "x"}, {"id": "y"}]));
    let ok = left_join_with_config("id", &unique, "a", &left, &config).expect("unique keys");
    assert_eq!(ok[0].1, Some(unique[0].clone()));
}

#[test]
fn test_falsy_right_keys_never_match() {
    let left = records(json!([{"a": 0}, {"a": ""}, {"a": false}]));
    let right = records(json!([{"id": 0}, {"id": ""}, {"id": false}]));

    let result = left_join("id", &right, "a", &left);
    assert!(result.iter().all(|(_, m)| m.is_none()));
}

#[test]
fn test_left_join_as_lazy_stage() {
    let left = collection();
    let right = joined_collection();

    let join = LeftJoinAssoc::new("a", "id", "a", &right);
    let stage = pipeline![
        join,
        map(|item: Value| Value::object([("a", get("a", &item).cloned().unwrap_or(Value::Null))])),
    ];

    let result = run_pipeline(stage, left);

    assert_eq!(
        result,
        records(json!([
            {"a": {"id": "a", "b": 2}},
            {"a": null},
            {"a": {"id": "c", "b": 5}},
        ]))
    );
}

#[test]
fn test_left_join_stage_pulls_lazily() {
    let right = generate_customers(3);
    let join = LeftJoin::new("id", &right, "customer.ref");

    let matched_ids: Vec<Value> = join
        .then(map(|(_, m): (Value, Option<Value>)| m))
        .lazy(generate_orders(1_000, 4))
        .flatten()
        .take(3)
        .filter_map(|customer| get("id", &customer).cloned())
        .collect();

    assert_eq!(
        matched_ids,
        vec![Value::from("c0"), Value::from("c1"), Value::from("c2")]
    );
}
