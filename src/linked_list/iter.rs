use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::doubly::DoublyLinkedList;
use super::node::{DoublyNode, SinglyNode};
use super::singly::SinglyLinkedList;

/// A borrowing forward iterator over a [`SinglyLinkedList`].
///
/// The iterator borrows the list, so the chain cannot be structurally
/// modified while it is alive.
pub struct SinglyIter<'a, T> {
    current: Option<NonNull<SinglyNode<T>>>,
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> SinglyIter<'a, T> {
    pub(crate) fn new(list: &'a SinglyLinkedList<T>) -> Self {
        Self {
            current: list.head_ptr(),
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for SinglyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        let node_ref = unsafe { &*node.as_ptr() };
        self.current = node_ref.next;
        self.remaining -= 1;
        Some(&node_ref.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SinglyIter<'_, T> {}
impl<T> FusedIterator for SinglyIter<'_, T> {}

/// A borrowing iterator over a [`DoublyLinkedList`].
///
/// Walks forward over `next`; [`DoubleEndedIterator`] walks backward over
/// `prev` from the tail. The two cursors meet in the middle without
/// overlapping.
pub struct DoublyIter<'a, T> {
    front: Option<NonNull<DoublyNode<T>>>,
    back: Option<NonNull<DoublyNode<T>>>,
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> DoublyIter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            front: list.head_ptr(),
            back: list.tail_ptr(),
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for DoublyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        let node_ref = unsafe { &*node.as_ptr() };
        self.front = node_ref.next;
        self.remaining -= 1;
        Some(&node_ref.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for DoublyIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        let node_ref = unsafe { &*node.as_ptr() };
        self.back = node_ref.prev;
        self.remaining -= 1;
        Some(&node_ref.value)
    }
}

impl<T> ExactSizeIterator for DoublyIter<'_, T> {}
impl<T> FusedIterator for DoublyIter<'_, T> {}

unsafe impl<T: Sync> Send for SinglyIter<'_, T> {}
unsafe impl<T: Sync> Sync for SinglyIter<'_, T> {}
unsafe impl<T: Sync> Send for DoublyIter<'_, T> {}
unsafe impl<T: Sync> Sync for DoublyIter<'_, T> {}

/// A consuming iterator over a [`SinglyLinkedList`], draining from the front.
pub struct SinglyIntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> SinglyIntoIter<T> {
    pub(crate) fn new(list: SinglyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for SinglyIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for SinglyIntoIter<T> {}
impl<T> FusedIterator for SinglyIntoIter<T> {}

/// A consuming iterator over a [`DoublyLinkedList`]. Drains from the front;
/// the back end drains with `pop` through [`DoubleEndedIterator`].
pub struct DoublyIntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> DoublyIntoIter<T> {
    pub(crate) fn new(list: DoublyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for DoublyIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for DoublyIntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop()
    }
}

impl<T> ExactSizeIterator for DoublyIntoIter<T> {}
impl<T> FusedIterator for DoublyIntoIter<T> {}
