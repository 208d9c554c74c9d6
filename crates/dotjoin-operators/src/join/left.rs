//! Left outer join stages.
//!
//! Every left element is kept. Its match is the right record registered
//! under the stringified left key, or nothing.

use std::borrow::Borrow;

use dotjoin_core::config::JoinConfig;
use dotjoin_core::path::DottedPath;
use dotjoin_core::value::Value;

use super::hash::JoinLookup;
use crate::traits::{OpError, Stage};

/// Pairs each left record with its match: `(left, Some(right))` or `(left, None)`.
#[derive(Debug, Clone)]
pub struct LeftJoin {
    left_key: DottedPath,
    lookup: JoinLookup,
}

impl LeftJoin {
    pub fn new<R>(right_key_path: &str, right: R, left_key_path: &str) -> Self
    where
        R: IntoIterator,
        R::Item: Borrow<Value>,
    {
        Self {
            left_key: DottedPath::parse(left_key_path),
            lookup: JoinLookup::build(&DottedPath::parse(right_key_path), right),
        }
    }

    pub fn with_config<R>(
        right_key_path: &str,
        right: R,
        left_key_path: &str,
        config: &JoinConfig,
    ) -> Result<Self, OpError>
    where
        R: IntoIterator,
        R::Item: Borrow<Value>,
    {
        Ok(Self {
            left_key: DottedPath::parse(left_key_path),
            lookup: JoinLookup::build_with_config(
                &DottedPath::parse(right_key_path),
                right,
                config,
            )?,
        })
    }

    pub fn lookup(&self) -> &JoinLookup {
        &self.lookup
    }

    pub fn pair(&self, left: Value) -> (Value, Option<Value>) {
        let matched = self.lookup.probe(self.left_key.resolve(&left)).cloned();
        (left, matched)
    }
}

impl Stage<Value> for LeftJoin {
    type Out = (Value, Option<Value>);

    fn name(&self) -> &'static str {
        "left_join"
    }

    fn step(&self, input: Value) -> Option<Self::Out> {
        Some(self.pair(input))
    }
}

/// Writes each left record's match (or `null`) into it at a result path.
#[derive(Debug, Clone)]
pub struct LeftJoinAssoc {
    left_key: DottedPath,
    result: DottedPath,
    lookup: JoinLookup,
}

impl LeftJoinAssoc {
    pub fn new<R>(left_key_path: &str, right_key_path: &str, result_path: &str, right: R) -> Self
    where
        R: IntoIterator,
        R::Item: Borrow<Value>,
    {
        Self {
            left_key: DottedPath::parse(left_key_path),
            result: DottedPath::parse(result_path),
            lookup: JoinLookup::build(&DottedPath::parse(right_key_path), right),
        }
    }

    pub fn with_config<R>(
        left_key_path: &str,
        right_key_path: &str,
        result_path: &str,
        right: R,
        config: &JoinConfig,
    ) -> Result<Self, OpError>
    where
        R: IntoIterator,
        R::Item: Borrow<Value>,
    {
        Ok(Self {
            left_key: DottedPath::parse(left_key_path),
            result: DottedPath::parse(result_path),
            lookup: JoinLookup::build_with_config(
                &DottedPath::parse(right_key_path),
                right,
                config,
            )?,
        })
    }

    pub fn lookup(&self) -> &JoinLookup {
        &self.lookup
    }

    pub fn apply(&self, left: &Value) -> Value {
        let matched = self
            .lookup
            .probe(self.left_key.resolve(left))
            .cloned()
            .unwrap_or(Value::Null);
        self.result.assoc(matched, left)
    }
}

impl Stage<Value> for LeftJoinAssoc {
    type Out = Value;

    fn name(&self) -> &'static str {
        "left_join_assoc"
    }

    fn step(&self, input: Value) -> Option<Value> {
        Some(self.apply(&input))
    }
}

/// Eager left join returning `(left, match)` pairs, one per left record.
///
/// ```
/// use dotjoin_core::value::Value;
/// use dotjoin_operators::left_join;
///
/// let left = vec![Value::from_json_str(r#"{"a": "a", "b": 2}"#).unwrap()];
/// let right = vec![Value::from_json_str(r#"{"id": "a", "c": 2}"#).unwrap()];
/// let joined = left_join("id", &right, "a", &left);
/// assert_eq!(joined, vec![(left[0].clone(), Some(right[0].clone()))]);
/// ```
pub fn left_join<R, L>(
    right_key_path: &str,
    right: R,
    left_key_path: &str,
    left: L,
) -> Vec<(Value, Option<Value>)>
where
    R: IntoIterator,
    R::Item: Borrow<Value>,
    L: IntoIterator,
    L::Item: Borrow<Value>,
{
    let join = LeftJoin::new(right_key_path, right, left_key_path);
    left.into_iter()
        .map(|record| join.pair(record.borrow().clone()))
        .collect()
}

/// [`left_join`] with an explicit duplicate-key policy.
pub fn left_join_with_config<R, L>(
    right_key_path: &str,
    right: R,
    left_key_path: &str,
    left: L,
    config: &JoinConfig,
) -> Result<Vec<(Value, Option<Value>)>, OpError>
where
    R: IntoIterator,
    R::Item: Borrow<Value>,
    L: IntoIterator,
    L::Item: Borrow<Value>,
{
    let join = LeftJoin::with_config(right_key_path, right, left_key_path, config)?;
    Ok(left
        .into_iter()
        .map(|record| join.pair(record.borrow().clone()))
        .collect())
}

/// Eager left join writing each match (or `null`) at `result_path`.
pub fn left_join_assoc<R, L>(
    left_key_path: &str,
    right_key_path: &str,
    result_path: &str,
    right: R,
    left: L,
) -> Vec<Value>
where
    R: IntoIterator,
    R::Item: Borrow<Value>,
    L: IntoIterator,
    L::Item: Borrow<Value>,
{
    let join = LeftJoinAssoc::new(left_key_path, right_key_path, result_path, right);
    left.into_iter()
        .map(|record| join.apply(record.borrow()))
        .collect()
}

/// [`left_join_assoc`] that stores the match over the left key itself.
pub fn left_join_replace<R, L>(
    left_key_path: &str,
    right_key_path: &str,
    right: R,
    left: L,
) -> Vec<Value>
where
    R: IntoIterator,
    R::Item: Borrow<Value>,
    L: IntoIterator,
    L::Item: Borrow<Value>,
{
    left_join_assoc(left_key_path, right_key_path, left_key_path, right, left)
}
