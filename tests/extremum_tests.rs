//! max_by / min_by tests

mod test_data_gen;

use dotjoin_core::value::Value;
use dotjoin_operators::{get, max_by, min_by};
use serde_json::json;
use test_data_gen::{generate_orders, records};

fn prop_a(record: &&Value) -> Option<Value> {
    get("a", record).and_then(Value::present).cloned()
}

#[test]
fn test_max_by_largest_property() {
    let collection = records(json!([{"a": 2}, {"a": 1}, {"a": null}]));
    assert_eq!(max_by(prop_a, &collection), Some(Value::from(2)));
}

#[test]
fn test_min_by_smallest_property() {
    let collection = records(json!([{"a": 2}, {"a": 1}, {"a": null}]));
    assert_eq!(min_by(prop_a, &collection), Some(Value::from(1)));
}

#[test]
fn test_empty_collections_yield_none() {
    let collection: Vec<Value> = Vec::new();
    assert_eq!(max_by(prop_a, &collection), None);
    assert_eq!(min_by(prop_a, &collection), None);
}

#[test]
fn test_all_absent_yield_none() {
    let collection = records(json!([{"a": null}, {"b": 1}, {}]));
    assert_eq!(max_by(prop_a, &collection), None);
    assert_eq!(min_by(prop_a, &collection), None);
}

#[test]
fn test_strings_compare_lexicographically() {
    let collection = records(json!([{"a": "pear"}, {"a": "apple"}, {"a": "quince"}]));
    assert_eq!(max_by(prop_a, &collection), Some(Value::from("quince")));
    assert_eq!(min_by(prop_a, &collection), Some(Value::from("apple")));
}

#[test]
fn test_native_selectors() {
    let orders = generate_orders(20, 3);
    let totals = |o: &&Value| get("total", o).and_then(Value::as_f64);

    let max = max_by(totals, &orders).expect("non-empty");
    let min = min_by(totals, &orders).expect("non-empty");

    let all: Vec<f64> = orders.iter().filter_map(|o| totals(&o)).collect();
    assert!(all.iter().all(|t| *t <= max && *t >= min));
    assert!(all.contains(&max) && all.contains(&min));
}
