//! Keyed in-memory collections built around an arena-allocated red-black tree.

mod entry;
pub mod arena;
pub mod linear_map;
pub mod red_black_tree;
