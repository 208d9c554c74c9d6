//! Pluck the same dotted path off every record.

use std::borrow::Borrow;

use dotjoin_core::path::DottedPath;
use dotjoin_core::value::Value;

/// One entry per input record, in order; `None` where the path is absent.
pub fn pluck_at_path<I>(path: &str, collection: I) -> Vec<Option<Value>>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let path = DottedPath::parse(path);
    collection
        .into_iter()
        .map(|record| path.resolve(record.borrow()).cloned())
        .collect()
}
