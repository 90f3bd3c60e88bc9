use crate::arena::{Arena, Ptr};
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree::Tree;
use crate::red_black_tree::Result;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that maintains the invariants that the
/// root is black, that no red node has a red child, and that every path from the root to an
/// absent child passes through the same number of black nodes. Keys are `i32` and unique; the
/// payload type carries no behavior. Mutating operations restore all invariants before returning,
/// and failed operations leave the map unchanged.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map[0], 1);
/// assert!(map.get(1).is_err());
/// assert_eq!(map.len(), 2);
///
/// map.set(0, 2).unwrap();
/// assert_eq!(map.remove(0), Ok(2));
/// assert!(map.remove(1).is_err());
/// ```
pub struct RedBlackMap<V> {
    tree: Tree<V>,
}

impl<V> RedBlackMap<V> {
    /// Constructs a new, empty `RedBlackMap<V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: Tree::new() }
    }

    /// Inserts a key-value pair into the map. Returns `Error::DuplicateKey` if the key already
    /// exists in the map, in which case the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey(1)));
    /// assert_eq!(map.get(1), Ok(&1));
    /// ```
    pub fn insert(&mut self, key: i32, value: V) -> Result<()> {
        self.tree.insert(key, value)
    }

    /// Removes a key from the map and returns the associated value. Returns `Error::KeyNotFound`
    /// if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(1), Ok(1));
    /// assert_eq!(map.remove(1), Err(Error::KeyNotFound(1)));
    /// ```
    pub fn remove(&mut self, key: i32) -> Result<V> {
        self.tree.remove(key).map(|entry| entry.value)
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `Error::KeyNotFound` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.get(0), Err(Error::KeyNotFound(0)));
    /// assert_eq!(map.get(1), Ok(&1));
    /// ```
    pub fn get(&self, key: i32) -> Result<&V> {
        self.tree
            .find(key)
            .map(move |ptr| &self.tree.arena[ptr].entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `Error::KeyNotFound` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.get_mut(1).unwrap() = 2;
    /// assert_eq!(map.get(1), Ok(&2));
    /// ```
    pub fn get_mut(&mut self, key: i32) -> Result<&mut V> {
        let ptr = self.tree.find(key)?;
        Ok(&mut self.tree.arena[ptr].entry.value)
    }

    /// Overwrites the value associated with a particular key in place; the tree's structure and
    /// colors are untouched. Returns `Error::KeyNotFound` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.set(1, 2).unwrap();
    /// assert_eq!(map.get(1), Ok(&2));
    /// ```
    pub fn set(&mut self, key: i32, value: V) -> Result<()> {
        let ptr = self.tree.find(key)?;
        self.tree.arena[ptr].entry.value = value;
        Ok(())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.contains_key(0));
    /// assert!(map.contains_key(1));
    /// ```
    pub fn contains_key(&self, key: i32) -> bool {
        self.tree.find(key).is_ok()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal, so keys come out in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 2).unwrap();
    /// map.insert(1, 1).unwrap();
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, V> {
        RedBlackMapIter {
            arena: &self.tree.arena,
            current: self.tree.root,
            stack: Vec::new(),
        }
    }

    /// Returns a read-only, restartable pre-order iterator over the map yielding
    /// `(key, color, depth)` for every node: the root first, then the left subtree, then the
    /// right subtree. This is the interface consumed by console printers; it cannot mutate the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{Color, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 2).unwrap();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    ///
    /// let mut traversal = map.traverse();
    /// assert_eq!(traversal.next(), Some((2, Color::Black, 0)));
    /// assert_eq!(traversal.next(), Some((1, Color::Red, 1)));
    /// assert_eq!(traversal.next(), Some((3, Color::Red, 1)));
    /// assert_eq!(traversal.next(), None);
    /// ```
    pub fn traverse(&self) -> RedBlackMapTraverse<'_, V> {
        RedBlackMapTraverse {
            arena: &self.tree.arena,
            stack: self.tree.root.map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<V> Default for RedBlackMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<i32> for RedBlackMap<V> {
    type Output = V;

    fn index(&self, key: i32) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<V> IndexMut<i32> for RedBlackMap<V> {
    fn index_mut(&mut self, key: i32) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<'a, V> IntoIterator for &'a RedBlackMap<V> {
    type IntoIter = RedBlackMapIter<'a, V>;
    type Item = (&'a i32, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMap<V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, V> {
    arena: &'a Arena<Node<V>>,
    current: Option<Ptr>,
    stack: Vec<Ptr>,
}

impl<'a, V> Iterator for RedBlackMapIter<'a, V> {
    type Item = (&'a i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ptr) = self.current {
            self.stack.push(ptr);
            self.current = self.arena[ptr].left;
        }
        self.stack.pop().map(|ptr| {
            let node = &self.arena[ptr];
            self.current = node.right;
            (&node.entry.key, &node.entry.value)
        })
    }
}

/// A pre-order iterator for `RedBlackMap<V>`.
///
/// This iterator yields the key, color, and depth of every node, parents before children and left
/// subtrees before right subtrees.
pub struct RedBlackMapTraverse<'a, V> {
    arena: &'a Arena<Node<V>>,
    stack: Vec<(Ptr, usize)>,
}

impl<'a, V> Iterator for RedBlackMapTraverse<'a, V> {
    type Item = (i32, Color, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|(ptr, depth)| {
            let node = &self.arena[ptr];
            if let Some(right) = node.right {
                self.stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                self.stack.push((left, depth + 1));
            }
            (node.entry.key, node.color, depth)
        })
    }
}
