//! Containers the core depends on or exposes at interface level (spec §4.14-§4.15).

mod dynamic_tuple;
mod k_ary_search_set;

pub use dynamic_tuple::DynamicTuple;
pub use k_ary_search_set::KArySearchSet;
