//! Keyed left joins.
//!
//! The right-hand collection is indexed once into a [`JoinLookup`]; the left
//! side is then mapped element by element, either through the `Stage`
//! implementations (lazy) or the eager helpers.

pub mod hash;
pub mod left;

pub use hash::{JoinLookup, LookupStats};
pub use left::{
    left_join, left_join_assoc, left_join_replace, left_join_with_config, LeftJoin, LeftJoinAssoc,
};
