//! Hash lookup built from the right-hand side of a join.
//!
//! Keys are the loosely stringified values at the key path. Records whose
//! key is falsy are never registered, so they cannot match anything.

use std::borrow::Borrow;
use std::collections::HashMap;

use dotjoin_core::config::{DuplicateKeys, JoinConfig};
use dotjoin_core::path::DottedPath;
use dotjoin_core::value::{coerce_key, Value};

use crate::metrics::emit_event;
use crate::traits::OpError;

/// Counters gathered while building a [`JoinLookup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    /// Right-hand records seen.
    pub rows: usize,
    /// Records skipped because their key was absent or falsy.
    pub skipped: usize,
    /// Records that replaced an earlier record with the same key.
    pub duplicates: usize,
}

#[derive(Debug, Clone, Default)]
pub struct JoinLookup {
    table: HashMap<String, Value>,
    stats: LookupStats,
}

impl JoinLookup {
    /// Build with last-write-wins semantics for repeated keys.
    pub fn build<I>(key_path: &DottedPath, right: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
    {
        let mut lookup = Self::default();
        for record in right {
            lookup.insert(key_path, record.borrow());
        }
        lookup
    }

    /// Build honouring `config.duplicate_keys`.
    pub fn build_with_config<I>(
        key_path: &DottedPath,
        right: I,
        config: &JoinConfig,
    ) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
    {
        let mut lookup = Self::default();
        for record in right {
            let replaced = lookup.insert(key_path, record.borrow());
            if let (Some(key), DuplicateKeys::Reject) = (replaced, config.duplicate_keys) {
                return Err(OpError::DuplicateKey { key });
            }
        }
        if config.trace_joins {
            lookup.emit_stats(key_path);
        }
        Ok(lookup)
    }

    /// Register `record`; returns the key if it displaced an earlier record.
    fn insert(&mut self, key_path: &DottedPath, record: &Value) -> Option<String> {
        self.stats.rows += 1;
        let Some(key) = key_path.resolve(record).filter(|k| k.is_truthy()) else {
            self.stats.skipped += 1;
            return None;
        };
        let key = key.coerce_to_string();
        match self.table.insert(key.clone(), record.clone()) {
            Some(_) => {
                self.stats.duplicates += 1;
                Some(key)
            }
            None => None,
        }
    }

    /// Record registered under the stringified `key`, if any.
    ///
    /// An absent key is looked up as `"undefined"`, the same text a missing
    /// value coerces to.
    pub fn probe(&self, key: Option<&Value>) -> Option<&Value> {
        self.table.get(&coerce_key(key))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn stats(&self) -> LookupStats {
        self.stats
    }

    fn emit_stats(&self, key_path: &DottedPath) {
        emit_event(
            "join_lookup",
            &[
                ("key_path", key_path.to_string()),
                ("rows", self.stats.rows.to_string()),
                ("keys", self.table.len().to_string()),
                ("skipped", self.stats.skipped.to_string()),
                ("duplicates", self.stats.duplicates.to_string()),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(j: serde_json::Value) -> Vec<Value> {
        match Value::from(j) {
            Value::Array(items) => items.as_ref().clone(),
            other => vec![other],
        }
    }

    #[test]
    fn skips_falsy_keys() {
        let right = records(json!([
            {"id": "a"}, {"id": 0}, {"id": ""}, {"id": null}, {"id": false}, {}, {"id": 1}
        ]));
        let lookup = JoinLookup::build(&DottedPath::parse("id"), &right);
        assert_eq!(lookup.len(), 2);
        assert_eq!(
            lookup.stats(),
            LookupStats {
                rows: 7,
                skipped: 5,
                duplicates: 0
            }
        );
        assert_eq!(lookup.probe(Some(&Value::from(1))), Some(&right[6]));
        assert_eq!(lookup.probe(Some(&Value::from("1"))), Some(&right[6]));
        assert_eq!(lookup.probe(Some(&Value::from(0))), None);
    }

    #[test]
    fn last_write_wins_by_default() {
        let right = records(json!([{"id": "a", "n": 1}, {"id": "a", "n": 2}]));
        let lookup = JoinLookup::build(&DottedPath::parse("id"), &right);
        assert_eq!(lookup.probe(Some(&Value::from("a"))), Some(&right[1]));
        assert_eq!(lookup.stats().duplicates, 1);
    }

    #[test]
    fn reject_policy_reports_the_key() {
        let right = records(json!([{"id": "a"}, {"id": "b"}, {"id": "a"}]));
        let config = JoinConfig::default().with_duplicate_keys(DuplicateKeys::Reject);
        let err = JoinLookup::build_with_config(&DottedPath::parse("id"), &right, &config)
            .expect_err("duplicate key");
        assert!(matches!(err, OpError::DuplicateKey { ref key } if key == "a"));
    }

    #[test]
    fn absent_probe_uses_undefined_text() {
        let right = records(json!([{"id": "undefined"}]));
        let lookup = JoinLookup::build(&DottedPath::parse("id"), &right);
        assert_eq!(lookup.probe(None), Some(&right[0]));
    }
}
