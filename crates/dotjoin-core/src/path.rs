//! Dotted paths: parsed once into typed segments, then used to read from or
//! rebuild nested values.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Map, Value};

/// One step of a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Canonical decimal integer; negative values count from the end of an array.
    Index(i64),
    /// Anything else, including the empty string.
    Key(String),
}

impl Segment {
    pub fn parse(raw: &str) -> Segment {
        match raw.parse::<i64>() {
            // "01", "+1" and "-0" stay keys so that Display round-trips.
            Ok(i) if i.to_string() == raw => Segment::Index(i),
            _ => Segment::Key(raw.to_string()),
        }
    }

    /// The member name this segment selects on an object.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Segment::Index(i) => Cow::Owned(i.to_string()),
            Segment::Key(k) => Cow::Borrowed(k),
        }
    }

    /// Take one step into `value`, or `None` when it cannot be traversed.
    pub fn step<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match (self, value) {
            (_, Value::Object(map)) => map.get(&*self.key()),
            (Segment::Index(i), Value::Array(items)) => {
                resolve_index(*i, items.len()).and_then(|at| items.get(at))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(i) => write!(f, "{i}"),
            Segment::Key(k) => f.write_str(k),
        }
    }
}

/// Map a possibly negative index onto `0..len`.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let at = if index < 0 { len + index } else { index };
    if (0..len).contains(&at) {
        usize::try_from(at).ok()
    } else {
        None
    }
}

/// A `.`-separated route into nested values.
///
/// Parsing never fails: `"a.b."` is `[Key("a"), Key("b"), Key("")]`, and the
/// trailing empty key simply resolves to nothing on ordinary records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DottedPath(Vec<Segment>);

impl DottedPath {
    pub fn parse(path: &str) -> Self {
        Self(path.split('.').map(Segment::parse).collect())
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Follow the path from `root`. An empty path resolves to `root` itself.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .try_fold(root, |current, segment| segment.step(current))
    }

    /// Return a copy of `root` with `value` stored at this path.
    ///
    /// Only the containers on the path are copied; everything else is shared
    /// with `root`. A container that is missing, or that the next segment
    /// cannot step into, is replaced by a fresh object.
    pub fn assoc(&self, value: Value, root: &Value) -> Value {
        assoc_segments(&self.0, value, root)
    }
}

fn assoc_segments(segments: &[Segment], value: Value, current: &Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    if let (Segment::Index(i), Value::Array(items)) = (head, current) {
        if let Some(at) = resolve_index(*i, items.len()) {
            let mut next = items.as_ref().clone();
            next[at] = assoc_segments(rest, value, &items[at]);
            return Value::Array(Arc::new(next));
        }
    }

    let mut map = match current {
        Value::Object(map) => map.as_ref().clone(),
        _ => Map::new(),
    };
    let key = head.key().into_owned();
    let child = assoc_segments(rest, value, map.get(&key).unwrap_or(&Value::Null));
    map.insert(key, child);
    Value::Object(Arc::new(map))
}

impl FromStr for DottedPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for DottedPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for DottedPath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for DottedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DottedPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DottedPath::from)
    }
}
