use crate::arena::{Arena, Ptr};
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::{Error, Result};
use std::cmp::Ordering;
use std::mem;

/// The node store and root reference of a red black tree.
///
/// `None` plays the role of the always-black sentinel: every comparison against the sentinel in
/// the classic formulation becomes a presence check here. The arena owns every node reachable
/// from `root`; `parent` handles are never used to free anything.
pub struct Tree<V> {
    pub arena: Arena<Node<V>>,
    pub root: Option<Ptr>,
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn is_red(&self, tree: Option<Ptr>) -> bool {
        match tree {
            None => false,
            Some(ptr) => self.arena[ptr].color == Color::Red,
        }
    }

    fn sibling(&self, ptr: Ptr) -> Option<Ptr> {
        let parent = self.arena[ptr]
            .parent
            .expect("Error: expected a parent node.");
        if self.arena[parent].left == Some(ptr) {
            self.arena[parent].right
        } else {
            self.arena[parent].left
        }
    }

    pub fn find(&self, key: i32) -> Result<Ptr> {
        let mut current = self.root;
        while let Some(ptr) = current {
            let node = &self.arena[ptr];
            match key.cmp(&node.entry.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Ok(ptr),
            }
        }
        Err(Error::KeyNotFound(key))
    }

    pub fn insert(&mut self, key: i32, value: V) -> Result<()> {
        // The descent happens before the allocation so that a duplicate key leaves both the tree
        // and the arena untouched.
        let mut parent = None;
        let mut current = self.root;
        while let Some(ptr) = current {
            parent = Some(ptr);
            let node = &self.arena[ptr];
            match key.cmp(&node.entry.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Err(Error::DuplicateKey(key)),
            }
        }

        let mut new_node = Node::new(key, value);
        new_node.parent = parent;
        let ptr = self.arena.insert(new_node);

        let parent = match parent {
            None => {
                self.arena[ptr].color = Color::Black;
                self.root = Some(ptr);
                return Ok(());
            }
            Some(parent) => parent,
        };

        if key < self.arena[parent].entry.key {
            self.arena[parent].left = Some(ptr);
        } else {
            self.arena[parent].right = Some(ptr);
        }

        // A red child of the black root cannot violate any invariant.
        if self.arena[parent].parent.is_none() {
            return Ok(());
        }

        self.fix_insert(ptr);
        Ok(())
    }

    fn fix_insert(&mut self, mut ptr: Ptr) {
        while Some(ptr) != self.root && self.is_red(self.arena[ptr].parent) {
            let parent = self.arena[ptr]
                .parent
                .expect("Error: expected a parent node.");
            let grandparent = self.arena[parent]
                .parent
                .expect("Error: expected a grandparent node.");

            if Some(parent) == self.arena[grandparent].left {
                let uncle = self.arena[grandparent].right;
                if self.is_red(uncle) {
                    // Color flip: push the fixup point up two levels.
                    if let Some(uncle) = uncle {
                        self.arena[uncle].color = Color::Black;
                    }
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    ptr = grandparent;
                } else {
                    if Some(ptr) == self.arena[parent].right {
                        // Inner configuration: rotate to a line first.
                        ptr = parent;
                        self.rotate_left(ptr);
                    }
                    let parent = self.arena[ptr]
                        .parent
                        .expect("Error: expected a parent node.");
                    let grandparent = self.arena[parent]
                        .parent
                        .expect("Error: expected a grandparent node.");
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if self.is_red(uncle) {
                    if let Some(uncle) = uncle {
                        self.arena[uncle].color = Color::Black;
                    }
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    ptr = grandparent;
                } else {
                    if Some(ptr) == self.arena[parent].left {
                        ptr = parent;
                        self.rotate_right(ptr);
                    }
                    let parent = self.arena[ptr]
                        .parent
                        .expect("Error: expected a parent node.");
                    let grandparent = self.arena[parent]
                        .parent
                        .expect("Error: expected a grandparent node.");
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    pub fn remove(&mut self, key: i32) -> Result<Entry<V>> {
        let ptr = self.find(key)?;
        Ok(self.remove_node(ptr))
    }

    fn remove_node(&mut self, ptr: Ptr) -> Entry<V> {
        let node = &self.arena[ptr];
        let (left, right, color) = (node.left, node.right, node.color);

        // Leaf: fix the double black before unlinking, while the sibling is still reachable
        // through the parent link.
        if left.is_none() && right.is_none() {
            if color == Color::Black {
                self.fix_double_black(ptr);
            } else if let Some(sibling) = self.sibling(ptr) {
                // Repainting the sibling on a red-leaf removal is intentional, not the canonical
                // no-fixup path. A red leaf's real sibling is itself a red leaf in any tree
                // satisfying the invariants, so the repaint never changes an observable color.
                self.arena[sibling].color = Color::Red;
            }

            match self.arena[ptr].parent {
                None => self.root = None,
                Some(parent) => {
                    if self.arena[parent].left == Some(ptr) {
                        self.arena[parent].left = None;
                    } else {
                        self.arena[parent].right = None;
                    }
                }
            }
            return self.arena.remove(ptr).entry;
        }

        // One child: splice the child into the node's position.
        if left.is_some() != right.is_some() {
            let child = left.or(right).expect("Error: expected a child node.");
            let parent = self.arena[ptr].parent;
            self.arena[child].parent = parent;
            match parent {
                None => self.root = Some(child),
                Some(parent) => {
                    if self.arena[parent].left == Some(ptr) {
                        self.arena[parent].left = Some(child);
                    } else {
                        self.arena[parent].right = Some(child);
                    }
                }
            }

            if color == Color::Black && self.arena[child].color == Color::Black {
                self.fix_double_black(child);
            } else {
                self.arena[child].color = Color::Black;
            }
            return self.arena.remove(ptr).entry;
        }

        // Two children: the in-order successor has at most one real child, so removing it falls
        // into one of the cases above. Its entry then overwrites this node's entry; the node's
        // identity and color are untouched.
        let mut successor = right.expect("Error: expected a right child node.");
        while let Some(next) = self.arena[successor].left {
            successor = next;
        }
        let successor_entry = self.remove_node(successor);
        mem::replace(&mut self.arena[ptr].entry, successor_entry)
    }

    /// Resolves a missing-black deficit at `ptr`, recursing upward until the deficit is absorbed
    /// or the root is reached.
    fn fix_double_black(&mut self, ptr: Ptr) {
        if Some(ptr) == self.root {
            return;
        }

        let parent = self.arena[ptr]
            .parent
            .expect("Error: expected a parent node.");
        let sibling = match self.sibling(ptr) {
            // No sibling to borrow a black from: push the deficit up.
            None => return self.fix_double_black(parent),
            Some(sibling) => sibling,
        };

        if self.arena[sibling].color == Color::Red {
            // Rotate the red sibling above the parent; the node gains a black sibling and the
            // deficit is resolved by the cases below.
            self.arena[parent].color = Color::Red;
            self.arena[sibling].color = Color::Black;
            if self.arena[parent].left == Some(sibling) {
                self.rotate_right(parent);
            } else {
                self.rotate_left(parent);
            }
            return self.fix_double_black(ptr);
        }

        let sibling_left = self.arena[sibling].left;
        let sibling_right = self.arena[sibling].right;

        if self.is_red(sibling_left) || self.is_red(sibling_right) {
            // The sibling lends a red child: one or two rotations resolve the deficit locally,
            // with the rotated-up node taking over the parent's prior color.
            let parent_color = self.arena[parent].color;
            let sibling_color = self.arena[sibling].color;
            let sibling_is_left = self.arena[parent].left == Some(sibling);

            if self.is_red(sibling_left) {
                let nephew = sibling_left.expect("Error: expected a red nephew node.");
                if sibling_is_left {
                    self.arena[nephew].color = sibling_color;
                    self.arena[sibling].color = parent_color;
                    self.rotate_right(parent);
                } else {
                    self.arena[nephew].color = parent_color;
                    self.rotate_right(sibling);
                    self.rotate_left(parent);
                }
            } else {
                let nephew = sibling_right.expect("Error: expected a red nephew node.");
                if sibling_is_left {
                    self.arena[nephew].color = parent_color;
                    self.rotate_left(sibling);
                    self.rotate_right(parent);
                } else {
                    self.arena[nephew].color = sibling_color;
                    self.arena[sibling].color = parent_color;
                    self.rotate_left(parent);
                }
            }

            self.arena[parent].color = Color::Black;
            return;
        }

        // Both nephews are black: recoloring the sibling red balances the siblings' black
        // heights, at the cost of moving the deficit to the parent.
        self.arena[sibling].color = Color::Red;
        if self.arena[parent].color == Color::Black {
            self.fix_double_black(parent);
        } else {
            self.arena[parent].color = Color::Black;
        }
    }

    fn rotate_left(&mut self, ptr: Ptr) {
        let child = self.arena[ptr]
            .right
            .expect("Error: expected a right child node.");
        let grandchild = self.arena[child].left;

        self.arena[ptr].right = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(ptr);
        }

        let parent = self.arena[ptr].parent;
        self.arena[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if self.arena[parent].left == Some(ptr) {
                    self.arena[parent].left = Some(child);
                } else {
                    self.arena[parent].right = Some(child);
                }
            }
        }

        self.arena[child].left = Some(ptr);
        self.arena[ptr].parent = Some(child);
    }

    fn rotate_right(&mut self, ptr: Ptr) {
        let child = self.arena[ptr]
            .left
            .expect("Error: expected a left child node.");
        let grandchild = self.arena[child].right;

        self.arena[ptr].left = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(ptr);
        }

        let parent = self.arena[ptr].parent;
        self.arena[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if self.arena[parent].left == Some(ptr) {
                    self.arena[parent].left = Some(child);
                } else {
                    self.arena[parent].right = Some(child);
                }
            }
        }

        self.arena[child].right = Some(ptr);
        self.arena[ptr].parent = Some(child);
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}
