//! Convenient re-exports for downstream crates.

pub use crate::config::{DuplicateKeys, JoinConfig};
pub use crate::error::{Error, Result};
pub use crate::path::{DottedPath, Segment};
pub use crate::value::{coerce_key, Map, Value};
