use core::fmt;

use crate::direction::Direction;
use crate::linked_list::doubly::DoublyLinkedList;
use crate::linked_list::iter::{DoublyIntoIter, DoublyIter};

/// A FIFO container over a [`DoublyLinkedList`].
///
/// `enqueue` appends at the tail, `dequeue` removes from the head, and both
/// ends relink in O(1). `dequeue` hands the removed value back to the caller.
///
/// # Examples
///
/// ```
/// use linear_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Number of values in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The value that the next `dequeue` would remove.
    pub fn peek(&self) -> Option<&T> {
        self.list.peek(Direction::Front)
    }

    /// The most recently enqueued value.
    pub fn peek_back(&self) -> Option<&T> {
        self.list.peek(Direction::Back)
    }

    /// Adds a value at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.append(value);
    }

    /// Removes and returns the earliest enqueued value.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.shift()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> DoublyIter<'_, T> {
        self.list.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Materializes the queue into a `Vec`, front first.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = DoublyIntoIter<T>;

    /// Consumes the queue, yielding values in dequeue order.
    fn into_iter(self) -> DoublyIntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = DoublyIter<'a, T>;

    fn into_iter(self) -> DoublyIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
