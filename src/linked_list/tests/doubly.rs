use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;

use crate::direction::Direction;
use crate::error::OutOfBoundsError;
use crate::linked_list::doubly::DoublyLinkedList;

#[test]
fn test_new_list_is_empty() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.peek(Direction::Front), None);
    assert_eq!(list.peek(Direction::Back), None);
}

#[test]
fn test_append_is_symmetric_to_prepend() {
    let mut list = DoublyLinkedList::new();
    list.append(2);
    list.prepend(1);
    list.append(3);

    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    // The same chain read backwards over the prev links.
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn test_back_peek_tracks_appends() {
    let mut list = DoublyLinkedList::new();
    for value in 0..100 {
        list.append(value);
        assert_eq!(list.peek(Direction::Back), Some(&value));
    }
    assert_eq!(list.peek(Direction::Front), Some(&0));
}

#[test]
fn test_pop_relinks_through_prev() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.peek(Direction::Back), Some(&2));
    // Forward and backward views must agree after the relink.
    assert_eq!(list.to_vec(), vec![1, 2]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1]);

    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.pop(), None);
    assert_eq!(list.peek(Direction::Front), None);
}

#[test]
fn test_shift_clears_new_head_back_link() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    assert_eq!(list.shift(), Some(1));
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2]);

    assert_eq!(list.shift(), Some(2));
    assert_eq!(list.shift(), Some(3));
    assert_eq!(list.shift(), None);
    assert_eq!(list.peek(Direction::Back), None);
}

#[test]
fn test_insert_middle_keeps_mirror_invariant() {
    let mut list: DoublyLinkedList<i32> = [1, 3, 4].into_iter().collect();
    list.insert(2, 1).unwrap();

    let forward: Vec<i32> = list.iter().copied().collect();
    let mut backward: Vec<i32> = list.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, vec![1, 2, 3, 4]);
    assert_eq!(forward, backward);
}

#[test]
fn test_insert_bounds() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.insert(1, 0), Ok(()));
    assert_eq!(list.insert(2, 2), Err(OutOfBoundsError));
    assert_eq!(list.insert(2, 1), Ok(()));
    assert_eq!(list.to_vec(), vec![1, 2]);
}

#[test]
fn test_get_and_set() {
    let mut list: DoublyLinkedList<i32> = (0..4).collect();
    assert_eq!(list.get(2), Some(&2));
    assert_eq!(list.get(4), None);

    list.set(9, 2).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 9, 3]);
    assert_eq!(list.set(9, 4), Err(OutOfBoundsError));

    let mut empty = DoublyLinkedList::new();
    empty.set(5, 0).unwrap();
    assert_eq!(empty.to_vec(), vec![5]);
}

#[test]
fn test_remove_at_middle_relinks_neighbors() {
    let mut list: DoublyLinkedList<char> = ['a', 'b', 'c'].into_iter().collect();
    assert_eq!(list.remove_at(1), Ok(Some('b')));
    assert_eq!(list.to_vec(), vec!['a', 'c']);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec!['c', 'a']);

    assert_eq!(list.remove_at(5), Err(OutOfBoundsError));

    let mut empty: DoublyLinkedList<char> = DoublyLinkedList::new();
    assert_eq!(empty.remove_at(0), Ok(None));
}

#[test]
fn test_remove_by_value() {
    let mut list: DoublyLinkedList<i32> = [5, 3, 5].into_iter().collect();
    assert_eq!(list.index_of(&5), Some(0));
    assert_eq!(list.remove(&5), Some(5));
    assert_eq!(list.to_vec(), vec![3, 5]);
    assert_eq!(list.remove(&7), None);
    assert!(list.contains(&3));
}

#[test]
fn test_clear_is_idempotent() {
    let mut list: DoublyLinkedList<i32> = (0..5).collect();
    list.clear();
    assert!(list.is_empty());
    list.clear();
    assert_eq!(list.len(), 0);

    list.concat([1, 2]);
    assert_eq!(list.to_vec(), vec![1, 2]);
}

#[test]
fn test_double_ended_iteration_meets_in_middle() {
    let list: DoublyLinkedList<i32> = (1..=4).collect();
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_from_both_ends() {
    let list: DoublyLinkedList<i32> = (1..=3).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
}

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_every_node_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));

    let mut list = DoublyLinkedList::new();
    for _ in 0..10 {
        list.append(DropCounter(Rc::clone(&drops)));
    }

    list.pop();
    list.shift();
    list.remove_at(4).unwrap();
    assert_eq!(drops.get(), 3);

    list.clear();
    assert_eq!(drops.get(), 10);
}

#[test]
fn test_random_ops_match_vec_model() {
    let mut rng = rand::rng();
    let mut list = DoublyLinkedList::new();
    let mut model: Vec<i32> = Vec::new();

    for step in 0..1_000 {
        match rng.random_range(0..6) {
            0 => {
                list.prepend(step);
                model.insert(0, step);
            }
            1 => {
                list.append(step);
                model.push(step);
            }
            2 => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(list.shift(), expected);
            }
            3 => {
                assert_eq!(list.pop(), model.pop());
            }
            4 => {
                let index = rng.random_range(0..=model.len());
                list.insert(step, index).unwrap();
                model.insert(index, step);
            }
            _ => {
                if !model.is_empty() {
                    let index = rng.random_range(0..model.len());
                    assert_eq!(list.remove_at(index), Ok(Some(model.remove(index))));
                }
            }
        }
        assert_eq!(list.len(), model.len());
    }

    assert_eq!(list.to_vec(), model);
    let mut backward: Vec<i32> = list.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(backward, model);
}
