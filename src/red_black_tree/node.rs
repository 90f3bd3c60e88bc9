use crate::arena::Ptr;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// All links are arena handles. `parent` is a non-owning back-reference used only for upward
/// traversal during fixup and rotation; the arena is the sole owner of every node. `None` stands
/// in for the absent-child sentinel, so it is always treated as black.
pub struct Node<V> {
    pub entry: Entry<V>,
    pub color: Color,
    pub parent: Option<Ptr>,
    pub left: Option<Ptr>,
    pub right: Option<Ptr>,
}

impl<V> Node<V> {
    pub fn new(key: i32, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }
}
