//! Fast, but limited allocator that hands out stable handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object in `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ptr(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Ptr>),
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// All objects inside the arena are destroyed when the arena is destroyed. Objects can be freed
/// individually, in which case their slot is threaded onto a vacancy list and reused by the next
/// allocation. Handles are plain indices, so growing the underlying `Vec` never invalidates them,
/// and no unsafe code is needed.
///
/// # Examples
///
/// ```
/// use balanced_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.insert(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.remove(x), 2);
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<Ptr>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns a handle to it. The handle can later be used
    /// to retrieve mutable and immutable references to the object, and to free the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena[x], 0);
    /// ```
    pub fn insert(&mut self, value: T) -> Ptr {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Ptr(self.slots.len() - 1)
            }
            Some(ptr) => {
                let vacant_slot = mem::replace(&mut self.slots[ptr.0], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next_ptr) => {
                        self.head = next_ptr;
                        ptr
                    }
                    Slot::Occupied(_) => panic!("Error: expected a vacant slot."),
                }
            }
        }
    }

    /// Frees an object in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle corresponds to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena.remove(x), 0);
    /// ```
    pub fn remove(&mut self, ptr: Ptr) -> T {
        if ptr.0 >= self.slots.len() {
            panic!("Error: attempting to free an invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[ptr.0], Slot::Vacant(self.head.take()));
        match old_slot {
            Slot::Vacant(_) => panic!("Error: attempting to free a vacant slot."),
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(ptr);
                value
            }
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.slots.get(ptr.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle does
    /// not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.insert(0);
    /// *arena.get_mut(x).unwrap() = 1;
    /// assert_eq!(arena.get(x), Some(&1));
    /// ```
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.slots.get_mut(ptr.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of objects in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.insert(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all objects from the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.insert(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = T;

    fn index(&self, ptr: Ptr) -> &Self::Output {
        self.get(ptr).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut Self::Output {
        self.get_mut(ptr).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Ptr};

    #[test]
    #[should_panic]
    fn test_remove_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.remove(Ptr(0));
    }

    #[test]
    #[should_panic]
    fn test_remove_vacant_slot() {
        let mut arena = Arena::new();
        let ptr = arena.insert(0);
        arena.remove(ptr);
        arena.remove(ptr);
    }

    #[test]
    fn test_insert() {
        let mut arena = Arena::new();
        assert_eq!(arena.insert(0), Ptr(0));
        assert_eq!(arena.insert(0), Ptr(1));
        assert_eq!(arena.insert(0), Ptr(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_remove_reuses_slot() {
        let mut arena = Arena::new();
        let ptr = arena.insert(1);
        assert_eq!(arena.remove(ptr), 1);
        assert_eq!(arena.insert(2), ptr);
        assert_eq!(arena[ptr], 2);
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = Arena::new();
        let ptr = arena.insert(0);
        arena.remove(ptr);
        assert_eq!(arena.get(ptr), None);
        assert_eq!(arena.get_mut(ptr), None);
    }

    #[test]
    fn test_get_invalid_slot() {
        let arena: Arena<u32> = Arena::new();
        assert_eq!(arena.get(Ptr(0)), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let ptr = arena.insert(0);
        *arena.get_mut(ptr).unwrap() = 1;
        assert_eq!(arena.get(ptr), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let ptr = arena.insert(0);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(ptr), None);
    }
}
