#![forbid(unsafe_code)]
//! dotjoin-operators: path access, keyed left joins, extremum reducers and
//! composable pipeline stages over `dotjoin-core` values.
//!
//! Design intent:
//! - Everything is pure and synchronous; no state survives a call.
//! - Misses (absent paths, unmatched join keys, empty reducers) are `None`,
//!   never errors. Errors are reserved for configuration policy and missing
//!   methods.
//! - Per-element work is expressed as a `Stage`, so joins drop into lazy
//!   pipelines as well as the eager helpers.

pub mod access;
pub mod extremum;
pub mod invoke;
pub mod join;
pub mod metrics;
pub mod pipeline;
pub mod pluck;
pub mod text;
pub mod traits;

pub use access::{assoc_at_path, equals_at_path, get, get_or, path_eq};
pub use extremum::{max_by, min_by};
pub use invoke::{invoke_method, Invocable, MethodTable};
pub use join::{
    left_join, left_join_assoc, left_join_replace, left_join_with_config, JoinLookup, LeftJoin,
    LeftJoinAssoc, LookupStats,
};
pub use pipeline::{filter, map, run_pipeline, run_pipeline_opt, FilterStage, Identity, MapStage, Then};
pub use pluck::pluck_at_path;
pub use text::capitalize_first;
pub use traits::{OpError, Stage, StageExt, Staged};
