use core::fmt;
use core::ptr::NonNull;

use crate::direction::Direction;
use crate::error::OutOfBoundsError;

use super::iter::{SinglyIntoIter, SinglyIter};
use super::node::SinglyNode;

/// An ordered chain of elements, each holding a link to its successor.
///
/// The list owns every node: nodes are allocated when a value is inserted and
/// reclaimed when it is removed, and they are never reachable from outside
/// the list. Head and tail are both tracked, so `prepend`, `append` and both
/// peeks are O(1); everything positional walks the chain from the head.
///
/// # Examples
///
/// ```
/// use linear_collections::{Direction, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
/// list.append(4);
/// list.prepend(0);
///
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.peek(Direction::Front), Some(&0));
/// assert_eq!(list.peek(Direction::Back), Some(&4));
/// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<SinglyNode<T>>>,
    tail: Option<NonNull<SinglyNode<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
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

    /// The value at the given end of the list, without removing it.
    ///
    /// O(1) for both directions: the tail is cached even though nodes carry
    /// no backward link.
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
        let node = SinglyNode::alloc(value, self.head);
        if self.head.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds a value at the back of the list. O(1).
    pub fn append(&mut self, value: T) {
        match self.tail {
            Some(tail) => {
                let node = SinglyNode::alloc(value, None);
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
    /// Index 0 prepends, `len` appends, anything in between splices a new
    /// node after the predecessor. Indices beyond `len` fail with
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

        let prev = self.node_at(index - 1).ok_or(OutOfBoundsError)?;
        unsafe {
            let prev_ref = &mut *prev.as_ptr();
            let node = SinglyNode::alloc(value, prev_ref.next);
            prev_ref.next = Some(node);
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
        // Iterative walk so dropping a long chain cannot recurse.
        while let Some(node) = current {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }

    /// Removes and returns the last value. O(n): without backward links the
    /// new tail is found by walking from the head.
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
            self.len = 0;
            return Some(unsafe { SinglyNode::dealloc(tail) });
        }

        let new_tail = self.node_at(self.len - 2)?;
        unsafe {
            (*new_tail.as_ptr()).next = None;
            self.tail = Some(new_tail);
            self.len -= 1;
            Some(SinglyNode::dealloc(tail))
        }
    }

    /// Removes and returns the first value. O(1).
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        unsafe {
            let node = Box::from_raw(head.as_ptr());
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Some(node.value)
        }
    }

    /// Removes and returns the value at `index`.
    ///
    /// An empty list is `Ok(None)`; an out-of-range index on a non-empty
    /// list is a caller bug and fails with [`OutOfBoundsError`]. The bounds
    /// check happens before any relinking.
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

        let prev = self.node_at(index - 1).ok_or(OutOfBoundsError)?;
        unsafe {
            let prev_ref = &mut *prev.as_ptr();
            let node = prev_ref.next.ok_or(OutOfBoundsError)?;
            let node = Box::from_raw(node.as_ptr());
            prev_ref.next = node.next;
            self.len -= 1;
            Ok(Some(node.value))
        }
    }

    /// A lazy forward iterator from head to tail.
    ///
    /// Restartable: each call starts a fresh walk. The iterator borrows the
    /// list, so structural mutation while it is alive is rejected at compile
    /// time.
    pub fn iter(&self) -> SinglyIter<'_, T> {
        SinglyIter::new(self)
    }

    /// Walks to the node at `index`. `None` when out of range.
    fn node_at(&self, index: usize) -> Option<NonNull<SinglyNode<T>>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        current
    }

    pub(crate) fn head_ptr(&self) -> Option<NonNull<SinglyNode<T>>> {
        self.head
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Index of the first element structurally equal to `value`.
    ///
    /// The scan is bounded by the chain itself, so a missing value is always
    /// `None` rather than a runaway walk.
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

impl<T: Clone> SinglyLinkedList<T> {
    /// Materializes the list into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.concat(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.concat(iter);
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = SinglyIntoIter<T>;

    fn into_iter(self) -> SinglyIntoIter<T> {
        SinglyIntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = SinglyIter<'a, T>;

    fn into_iter(self) -> SinglyIter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}
