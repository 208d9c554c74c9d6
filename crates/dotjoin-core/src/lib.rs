#![forbid(unsafe_code)]
//! dotjoin-core: the shared data model for dotjoin.
//!
//! - `value`: JSON-like `Value` with `Arc`-shared composites, so deriving a
//!   record from another only copies the containers along the touched path.
//! - `path`: `DottedPath` parsed once into typed segments, plus traversal
//!   (`resolve`) and persistent update (`assoc`).
//! - `config`: serde-friendly `JoinConfig` with env overrides.
//!
//! No operators live here. `dotjoin-operators` builds on these types.

pub mod config;
pub mod error;
pub mod path;
pub mod prelude;
pub mod value;
