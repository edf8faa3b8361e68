//! In-memory linear collections.
//!
//! The core of the crate is a pair of owning linked lists,
//! [`SinglyLinkedList`] and [`DoublyLinkedList`], which handle node
//! allocation, traversal and positional mutation. Three derived containers
//! restrict the lists to a narrower vocabulary: [`Stack`] (LIFO, over the
//! singly list) and [`Queue`]/[`Deque`] (FIFO / two-ended, over the doubly
//! list).
//!
//! Everything is single-threaded and unbounded: no capacity limits, no
//! interior locking. Index errors ([`OutOfBoundsError`]) are reserved for
//! structurally invalid indices; an operation that legitimately has nothing
//! to return yields `None` instead.
//!
//! # Examples
//!
//! ```
//! use linear_collections::{Direction, Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.dequeue(), Some("first"));
//! ```

pub mod deque;
pub mod direction;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use deque::Deque;
pub use direction::Direction;
pub use error::OutOfBoundsError;
pub use linked_list::{DoublyLinkedList, SinglyLinkedList};
pub use queue::Queue;
pub use stack::Stack;
