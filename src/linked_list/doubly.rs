use core::fmt;
use core::ptr::NonNull;

use crate::direction::Direction;
use crate::error::OutOfBoundsError;

use super::iter::{DoublyIntoIter, DoublyIter};
use super::node::DoublyNode;

/// An ordered chain of elements linked in both directions.
///
/// Same contract as [`SinglyLinkedList`], with the backward links making the
/// tail-side operations cheap: `pop` relinks through `tail.prev` in O(1)
/// instead of walking the chain, and iteration runs in either direction.
/// Ownership still flows through `next` only; `prev` is a plain back-pointer.
///
/// # Examples
///
/// ```
/// use linear_collections::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<&str> = DoublyLinkedList::new();
/// list.concat(["a", "b", "c"]);
///
/// assert_eq!(list.pop(), Some("c"));
/// assert_eq!(list.shift(), Some("a"));
/// assert_eq!(list.to_vec(), vec!["b"]);
/// ```
///
/// [`SinglyLinkedList`]: super::singly::SinglyLinkedList
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<DoublyNode<T>>>,
    tail: Option<NonNull<DoublyNode<T>>>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at the given end of the list, without removing it. O(1).
    pub fn peek(&self, direction: Direction) -> Option<&T> {
        let node = match direction {
            Direction::Front => self.head,
            Direction::Back => self.tail,
        };
        node.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The value at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable access to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Adds a value at the front of the list. O(1).
    pub fn prepend(&mut self, value: T) {
        let node = DoublyNode::alloc(value, self.head, None);
        match self.head {
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds a value at the back of the list. O(1), symmetric to `prepend`.
    pub fn append(&mut self, value: T) {
        match self.tail {
            Some(tail) => {
                let node = DoublyNode::alloc(value, None, Some(tail));
                unsafe { (*tail.as_ptr()).next = Some(node) };
                self.tail = Some(node);
                self.len += 1;
            }
            None => self.prepend(value),
        }
    }

    /// Appends every value in order, returning `&mut self` for chaining.
    pub fn concat<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.append(value);
        }
        self
    }

    /// Inserts a value so that it ends up at `index`.
    ///
    /// Index 0 prepends, `len` appends, anything in between splices through
    /// both straddling nodes' links. Indices beyond `len` fail with
    /// [`OutOfBoundsError`] before any mutation.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), OutOfBoundsError> {
        if index > self.len {
            return Err(OutOfBoundsError);
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        // Interior: the node currently at `index` and its predecessor both
        // exist, and the new node lands between them.
        let next = self.node_at(index).ok_or(OutOfBoundsError)?;
        let prev = unsafe { (*next.as_ptr()).prev }.ok_or(OutOfBoundsError)?;
        let node = DoublyNode::alloc(value, Some(next), Some(prev));
        unsafe {
            (*prev.as_ptr()).next = Some(node);
            (*next.as_ptr()).prev = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Overwrites the value at `index`.
    ///
    /// On an empty list the value is prepended instead, whatever the index.
    /// On a non-empty list an index outside `0..len` fails with
    /// [`OutOfBoundsError`].
    pub fn set(&mut self, value: T, index: usize) -> Result<(), OutOfBoundsError> {
        if self.is_empty() {
            self.prepend(value);
            return Ok(());
        }
        let node = self.node_at(index).ok_or(OutOfBoundsError)?;
        unsafe { (*node.as_ptr()).value = value };
        Ok(())
    }

    /// Removes every element, freeing the whole chain. Idempotent.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        // Ownership runs through `next`, so one forward walk frees everything.
        while let Some(node) = current {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }

    /// Removes and returns the last value. O(1) via the tail's back-pointer.
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        unsafe {
            let node = Box::from_raw(tail.as_ptr());
            self.tail = node.prev;
            match self.tail {
                Some(new_tail) => (*new_tail.as_ptr()).next = None,
                None => self.head = None,
            }
            self.len -= 1;
            Some(node.value)
        }
    }

    /// Removes and returns the first value. O(1).
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        unsafe {
            let node = Box::from_raw(head.as_ptr());
            self.head = node.next;
            match self.head {
                Some(new_head) => (*new_head.as_ptr()).prev = None,
                None => self.tail = None,
            }
            self.len -= 1;
            Some(node.value)
        }
    }

    /// Removes and returns the value at `index`.
    ///
    /// An empty list is `Ok(None)`; an out-of-range index on a non-empty
    /// list fails with [`OutOfBoundsError`]. Locating the node is O(n) but
    /// the splice itself relinks the two neighbors directly.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<T>, OutOfBoundsError> {
        if self.is_empty() {
            return Ok(None);
        }
        if index == 0 {
            return Ok(self.shift());
        }
        if index == self.len - 1 {
            return Ok(self.pop());
        }
        if index >= self.len {
            return Err(OutOfBoundsError);
        }

        let node = self.node_at(index).ok_or(OutOfBoundsError)?;
        unsafe {
            let node = Box::from_raw(node.as_ptr());
            // Interior node: both neighbors exist.
            if let Some(prev) = node.prev {
                (*prev.as_ptr()).next = node.next;
            }
            if let Some(next) = node.next {
                (*next.as_ptr()).prev = node.prev;
            }
            self.len -= 1;
            Ok(Some(node.value))
        }
    }

    /// A lazy iterator from head to tail; reversible via
    /// [`DoubleEndedIterator`]. Borrows the list, so structural mutation
    /// while it is alive is rejected at compile time.
    pub fn iter(&self) -> DoublyIter<'_, T> {
        DoublyIter::new(self)
    }

    /// Walks to the node at `index`. `None` when out of range.
    fn node_at(&self, index: usize) -> Option<NonNull<DoublyNode<T>>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        current
    }

    pub(crate) fn head_ptr(&self) -> Option<NonNull<DoublyNode<T>>> {
        self.head
    }

    pub(crate) fn tail_ptr(&self) -> Option<NonNull<DoublyNode<T>>> {
        self.tail
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Index of the first element structurally equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    /// Whether any element is structurally equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element structurally equal to `value`, returning
    /// it, or `None` if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        // index_of only yields in-range indices.
        self.remove_at(index).ok().flatten()
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Materializes the list into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.concat(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.concat(iter);
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = DoublyIntoIter<T>;

    fn into_iter(self) -> DoublyIntoIter<T> {
        DoublyIntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = DoublyIter<'a, T>;

    fn into_iter(self) -> DoublyIter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
