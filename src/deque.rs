use core::fmt;

use crate::direction::Direction;
use crate::linked_list::doubly::DoublyLinkedList;
use crate::linked_list::iter::{DoublyIntoIter, DoublyIter};

/// A two-ended container over a [`DoublyLinkedList`].
///
/// Values go in and come out at either end, all in O(1). Unlike
/// [`Queue::peek`], `peek` here takes an explicit [`Direction`]; a deque has
/// no privileged end.
///
/// # Examples
///
/// ```
/// use linear_collections::{Deque, Direction};
///
/// let mut deque = Deque::new();
/// deque.append(2);
/// deque.prepend(1);
/// deque.append(3);
///
/// assert_eq!(deque.peek(Direction::Front), Some(&1));
/// assert_eq!(deque.peek(Direction::Back), Some(&3));
/// assert_eq!(deque.shift(), Some(1));
/// assert_eq!(deque.pop(), Some(3));
/// ```
///
/// [`Queue::peek`]: crate::Queue::peek
pub struct Deque<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Deque<T> {
    /// Creates a new, empty deque.
    pub const fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Number of values in the deque.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The value at the given end, without removing it.
    pub fn peek(&self, direction: Direction) -> Option<&T> {
        self.list.peek(direction)
    }

    /// Adds a value at the back.
    pub fn append(&mut self, value: T) {
        self.list.append(value);
    }

    /// Adds a value at the front.
    pub fn prepend(&mut self, value: T) {
        self.list.prepend(value);
    }

    /// Removes and returns the value at the back.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop()
    }

    /// Removes and returns the value at the front.
    pub fn shift(&mut self) -> Option<T> {
        self.list.shift()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from front to back; reversible via [`DoubleEndedIterator`].
    pub fn iter(&self) -> DoublyIter<'_, T> {
        self.list.iter()
    }
}

impl<T: Clone> Deque<T> {
    /// Materializes the deque into a `Vec`, front first.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = DoublyIntoIter<T>;

    /// Consumes the deque, yielding values front first.
    fn into_iter(self) -> DoublyIntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = DoublyIter<'a, T>;

    fn into_iter(self) -> DoublyIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Deque;
    use crate::direction::Direction;

    #[test]
    fn test_both_ends() {
        let mut deque = Deque::new();
        deque.append(2);
        deque.append(3);
        deque.prepend(1);

        assert_eq!(deque.to_vec(), vec![1, 2, 3]);
        assert_eq!(deque.pop(), Some(3));
        assert_eq!(deque.shift(), Some(1));
        assert_eq!(deque.to_vec(), vec![2]);
    }

    #[test]
    fn test_peek_requires_direction() {
        let mut deque = Deque::new();
        assert_eq!(deque.peek(Direction::Front), None);

        deque.append("mid");
        assert_eq!(deque.peek(Direction::Front), Some(&"mid"));
        assert_eq!(deque.peek(Direction::Back), Some(&"mid"));

        deque.prepend("front");
        deque.append("back");
        assert_eq!(deque.peek(Direction::Front), Some(&"front"));
        assert_eq!(deque.peek(Direction::Back), Some(&"back"));
    }

    #[test]
    fn test_drain_to_empty() {
        let mut deque: Deque<i32> = (0..3).collect();
        assert_eq!(deque.shift(), Some(0));
        assert_eq!(deque.pop(), Some(2));
        assert_eq!(deque.pop(), Some(1));
        assert_eq!(deque.pop(), None);
        assert_eq!(deque.shift(), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn test_reverse_iteration() {
        let deque: Deque<i32> = (1..=4).collect();
        let backwards: Vec<i32> = deque.iter().rev().copied().collect();
        assert_eq!(backwards, vec![4, 3, 2, 1]);
    }
}
