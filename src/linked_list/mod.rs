//! Owning linked lists.
//!
//! Two variants with the same contract:
//!
//! - [`singly::SinglyLinkedList`]: forward links only. Head and tail are both
//!   cached, so both peeks and both insertions at the ends are O(1), but
//!   removing the tail must walk the chain.
//! - [`doubly::DoublyLinkedList`]: forward and backward links. Tail removal
//!   is O(1) and iteration runs in either direction.
//!
//! The list owns its nodes outright: values go in, borrows come out, and no
//! node is ever reachable from outside. Backward links in the doubly variant
//! carry no ownership; the chain is freed by a single forward walk.
//!
//! # Examples
//!
//! ```
//! use linear_collections::linked_list::doubly::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<i32> = (1..=5).collect();
//!
//! list.insert(0, 0).unwrap();
//! assert_eq!(list.remove_at(3), Ok(Some(3)));
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 4, 5]);
//! assert_eq!(list.iter().rev().next(), Some(&5));
//! ```

pub mod doubly;
pub mod iter;
mod node;
pub mod singly;

#[cfg(test)]
mod tests;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
