#![forbid(unsafe_code)]
//! dotjoin: dotted-path access, keyed left joins and small functional
//! helpers over JSON-like records.
//!
//! This crate only re-exports the workspace members:
//! - [`dotjoin_core`]: `Value`, `DottedPath`, `JoinConfig`, errors.
//! - [`dotjoin_operators`]: path access, joins, reducers, stages and helpers.

pub use dotjoin_core;
pub use dotjoin_operators;

pub use dotjoin_core::prelude::*;
pub use dotjoin_operators::pipeline;
pub use dotjoin_operators::{
    assoc_at_path, capitalize_first, equals_at_path, filter, get, get_or, invoke_method,
    left_join, left_join_assoc, left_join_replace, left_join_with_config, map, max_by, min_by,
    path_eq, pluck_at_path, run_pipeline, run_pipeline_opt, Invocable, LeftJoin, LeftJoinAssoc,
    MethodTable, OpError, Stage, StageExt,
};
