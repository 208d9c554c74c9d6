//! Shared record builders for the integration tests.
#![allow(dead_code)]

use dotjoin_core::value::Value;

/// Split a JSON array literal into one `Value` per element.
pub fn records(j: serde_json::Value) -> Vec<Value> {
    match j {
        serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
        other => vec![Value::from(other)],
    }
}

pub fn value(j: serde_json::Value) -> Value {
    Value::from(j)
}

/// `n` orders; order `i` belongs to customer `c{i % customers}`.
pub fn generate_orders(n: usize, customers: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            value(serde_json::json!({
                "id": i,
                "customer": { "ref": format!("c{}", i % customers.max(1)) },
                "total": (i * 7 % 100) as f64 + 0.5,
            }))
        })
        .collect()
}

/// `n` customers with ids `c0..c{n-1}`.
pub fn generate_customers(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            value(serde_json::json!({
                "id": format!("c{i}"),
                "profile": { "name": format!("Customer {i}"), "tier": i % 3 },
            }))
        })
        .collect()
}
