//! Unindexed keyed list that answers every lookup with a sequential scan.

use crate::entry::Entry;

/// An append-only keyed collection backed by a `Vec`.
///
/// Every operation other than `insert` is a linear scan, so the list exists as an O(n) baseline
/// to benchmark the indexed maps against. It performs no duplicate checking and shares no state
/// or error types with the tree-based collections.
///
/// # Examples
///
/// ```
/// use balanced_collections::linear_map::LinearMap;
///
/// let mut map = LinearMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(0), Some(&1));
/// assert_eq!(map.get(1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.remove(0), Some(1));
/// assert_eq!(map.remove(1), None);
/// ```
pub struct LinearMap<V> {
    items: Vec<Entry<V>>,
}

impl<V> LinearMap<V> {
    /// Constructs a new, empty `LinearMap<V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let map: LinearMap<u32> = LinearMap::new();
    /// ```
    pub fn new() -> Self {
        LinearMap { items: Vec::new() }
    }

    /// Appends a key-value pair to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let mut map = LinearMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: i32, value: V) {
        self.items.push(Entry { key, value });
    }

    fn find(&self, key: i32) -> Option<usize> {
        self.items.iter().position(|entry| entry.key == key)
    }

    /// Returns an immutable reference to the value associated with the first occurrence of a
    /// particular key. Returns `None` if the key does not exist in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let mut map = LinearMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(0), None);
    /// assert_eq!(map.get(1), Some(&1));
    /// ```
    pub fn get(&self, key: i32) -> Option<&V> {
        self.find(key).map(move |index| &self.items[index].value)
    }

    /// Removes the first occurrence of a key from the list and returns the associated value.
    /// Returns `None` if the key does not exist in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let mut map = LinearMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(1), Some(1));
    /// assert_eq!(map.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i32) -> Option<V> {
        self.find(key)
            .map(|index| self.items.remove(index).value)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let mut map = LinearMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let map: LinearMap<u32> = LinearMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the list. The iterator will yield key-value pairs in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linear_map::LinearMap;
    ///
    /// let mut map = LinearMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> LinearMapIter<'_, V> {
        LinearMapIter {
            items: self.items.iter(),
        }
    }
}

impl<V> Default for LinearMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a LinearMap<V> {
    type IntoIter = LinearMapIter<'a, V>;
    type Item = (&'a i32, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `LinearMap<V>`.
///
/// This iterator yields the elements of the list in insertion order.
pub struct LinearMapIter<'a, V> {
    items: std::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for LinearMapIter<'a, V> {
    type Item = (&'a i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|entry| (&entry.key, &entry.value))
    }
}
