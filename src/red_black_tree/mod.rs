//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions. Nodes carry parent back-references and
//! live in a typed arena, so the fixup protocols walk the tree in both directions without
//! reference cycles.

mod map;
mod node;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIter, RedBlackMapTraverse};
pub use self::node::Color;

use std::error;
use std::fmt;
use std::result;

/// The errors that keyed operations on the tree can produce. Failed operations leave the tree
/// unchanged, so both variants are recoverable by the caller.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateKey(i32),
    KeyNotFound(i32),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey(key) => write!(f, "key {} is already present in the tree", key),
            Error::KeyNotFound(key) => write!(f, "key {} does not exist in the tree", key),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
