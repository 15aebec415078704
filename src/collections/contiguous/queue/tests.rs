#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyCollection;

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    for i in 0..12 {
        queue.enqueue(i);
    }
    assert_eq!(queue.cap(), 12, "The Queue should grow 5 -> 8 -> 12.");

    for i in 0..12 {
        assert_eq!(queue.dequeue(), Some(i), "Values should leave in the order they arrived.");
    }
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_growth_while_wrapped() {
    let mut queue = Queue::with_cap(5);
    queue.extend(0..5);
    for i in 0..3 {
        assert_eq!(queue.dequeue(), Some(i));
    }
    queue.extend(5..8);
    assert_eq!(queue.cap(), 5, "Wrapping around shouldn't grow the buffer.");
    assert_eq!(queue.head, 3);

    queue.enqueue(8);
    assert_eq!(queue.cap(), 8);
    assert_eq!(queue.head, 0, "Growing should unroll the values to the start of the buffer.");
    assert!(queue.iter().copied().eq(3..9), "Growing should preserve the order of values.");
    assert_eq!(queue.iter().len(), 6);
    assert!(queue.into_iter().eq(3..9));
}

#[test]
fn test_empty_access() {
    let mut queue: Queue<String> = Queue::with_cap(0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.try_peek(), Err(EmptyCollection));
    assert_eq!(queue.try_dequeue(), Err(EmptyCollection));

    queue.enqueue("front".into());
    queue.enqueue("back".into());
    assert_eq!(queue.cap(), 5);
    assert_eq!(queue.try_peek().map(String::as_str), Ok("front"));
    assert_eq!(queue.get(1).map(String::as_str), Some("back"));
    assert_eq!(queue.get(2), None);
    assert!(queue.contains(&"back".to_string()));
    assert_eq!(queue.try_dequeue().as_deref(), Ok("front"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_drop_and_clear() {
    let counter = CountedDrop::new();
    let mut queue: Queue<_> = std::iter::repeat_with(|| counter.clone()).take(9).collect();

    drop(queue.dequeue());
    assert_eq!(counter.drops(), 1);

    queue.clear();
    assert_eq!(counter.drops(), 9, "Clearing should drop every value.");
    assert!(queue.is_empty());
    assert_eq!(queue.cap(), 5);
}

#[test]
fn test_equality() {
    let mut wrapped = Queue::with_cap(4);
    wrapped.extend([0, 0, 1, 2]);
    wrapped.dequeue();
    wrapped.dequeue();
    wrapped.extend([3, 4]);

    let straight: Queue<_> = (1..=4).collect();
    assert_eq!(wrapped, straight, "Equality should only depend on the order of values.");
    assert_eq!(wrapped.clone(), straight);
}
