use core::fmt;

use crate::direction::Direction;
use crate::linked_list::iter::{SinglyIntoIter, SinglyIter};
use crate::linked_list::singly::SinglyLinkedList;

/// A LIFO container over a [`SinglyLinkedList`].
///
/// `push` appends at the tail and `pop` removes it, so the most recently
/// pushed value is the first one back out. The backing list has no backward
/// links, which makes `pop` O(n); everything else is O(1).
///
/// # Examples
///
/// ```
/// use linear_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
///
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The value that the next `pop` would remove.
    pub fn peek(&self) -> Option<&T> {
        self.list.peek(Direction::Back)
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.append(value);
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> SinglyIter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Whether any value on the stack is structurally equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T: Clone> Stack<T> {
    /// Materializes the stack into a `Vec`, bottom first.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = SinglyIntoIter<T>;

    /// Consumes the stack, yielding values bottom first.
    fn into_iter(self) -> SinglyIntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = SinglyIter<'a, T>;

    fn into_iter(self) -> SinglyIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
