//! Bitap (shift-or) substring search (spec §4.11), grounded on
//! `examples/original_source/include/burst/algorithm/searching/bitap.hpp` and its
//! `detail::element_position_bitmask_table` helper.

mod bitap;

pub use bitap::{Bitap, DenseByteTable, Matches, SparseTable, MAX_PATTERN_LEN};
