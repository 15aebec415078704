#![cfg(test)]

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, InvalidArgument};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_from_default() {
    let mut vec = Vector::with_cap(5);
    for i in 0..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 5, "Filling the Vector exactly shouldn't grow it.");

    vec.push(5);
    assert_eq!(vec.cap(), 8, "The sixth push should grow the capacity to ceil(5 * 1.5).");
    assert_eq!(vec.len(), 6);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5], "Growth should keep every element in order.");

    let mut vec = Vector::with_cap(0);
    vec.push('a');
    assert_eq!(vec.cap(), 5, "An empty allocation should grow straight to the default.");
}

#[test]
fn test_growth_is_amortized() {
    const N: usize = 1000;

    let mut vec = Vector::new();
    let mut copies = 0;
    for i in 0..N {
        let cap = vec.cap();
        vec.push(i);
        if vec.cap() != cap {
            // Growing moves every element that was already stored.
            copies += i;
        }
    }

    assert!(vec.cap() >= N, "Final capacity should fit every element.");
    assert!(
        copies <= 3 * N,
        "Total elements moved by growth ({copies}) should be linear in the number of pushes."
    );
    assert!(vec.iter().copied().eq(0..N));
}

#[test]
fn test_bounds() {
    let mut vec: Vector<_> = (0..4).collect();

    for i in 0..4 {
        assert_eq!(vec.try_get(i), Ok(&i), "In-bounds access should succeed.");
        assert_eq!(vec.try_set(i, i * 10), Ok(()));
    }
    assert_eq!(vec.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(vec.try_get_mut(usize::MAX).err(), Some(IndexOutOfBounds {
        index: usize::MAX,
        len: 4,
    }));
    assert_eq!(vec.try_set(4, 0), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(vec.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(
        vec.try_insert(5, 0),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 }))
    );
    assert_eq!(&*vec, &[0, 10, 20, 30], "Failed operations shouldn't modify the Vector.");

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.remove(0);
    });
    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.set(0, 1);
    });
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 100);
    vec.insert(6, 200);
    vec.insert(3, 300);
    assert_eq!(&*vec, &[100, 0, 1, 300, 2, 3, 4, 200]);
    assert_eq!(vec.cap(), 8, "Inserting past the capacity should grow the Vector.");

    assert_eq!(vec.remove(3), 300);
    assert_eq!(vec.remove(0), 100);
    assert_eq!(vec.remove(5), 200);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    assert_eq!(vec.replace(2, 20), 2);
    assert_eq!(vec.index_of(&20), Some(2));
    assert!(vec.remove_item(&20));
    assert!(!vec.remove_item(&20), "A missing item should report that it wasn't found.");
    assert!(!vec.contains(&20));
    assert_eq!(&*vec, &[0, 1, 3, 4]);

    while vec.pop().is_some() {}
    assert!(vec.is_empty());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }
    assert_eq!(counter.drops(), 0, "Growing shouldn't drop any elements.");

    vec.set(0, counter.clone());
    assert_eq!(counter.drops(), 1, "Overwriting an element should drop the old one.");

    drop(vec.remove(3));
    assert_eq!(counter.drops(), 2);

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 11, "Every element should be dropped exactly once.");

    let mut vec = Vector::new();
    vec.extend(std::iter::repeat_with(|| counter.clone()).take(7));
    vec.clear();
    assert_eq!(counter.drops(), 18, "Clearing should drop every element.");
    assert_eq!(vec.cap(), 5, "Clearing should reset the capacity to the default.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert!(vec.cap() >= 100);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 99);
}

#[test]
fn test_capacity_limits() {
    assert_eq!(Vector::<u64>::try_with_cap(usize::MAX).err(), Some(CapacityOverflow));

    let mut vec: Vector<u64> = Vector::new();
    assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(vec.try_reserve(isize::MAX as usize), Err(CapacityOverflow));
    assert_eq!(vec.cap(), 5, "A failed reservation shouldn't change the capacity.");

    vec.reserve(20);
    assert_eq!(vec.cap(), 20);
    vec.reserve(3);
    assert_eq!(vec.cap(), 20, "Reserving less than the free capacity should do nothing.");
}

#[test]
fn test_copy_to() {
    let vec: Vector<_> = (1..=3).collect();

    let mut dest = [0; 5];
    assert_eq!(vec.copy_to(&mut dest, 1), Ok(()));
    assert_eq!(dest, [0, 1, 2, 3, 0]);

    assert!(matches!(vec.copy_to(&mut dest, 3), Err(InvalidArgument { .. })));
    assert!(matches!(vec.copy_to(&mut dest, 6), Err(InvalidArgument { .. })));
    assert_eq!(dest, [0, 1, 2, 3, 0], "A failed copy shouldn't write anything.");
}

#[test]
fn test_equality_and_clone() {
    let vec: Vector<String> = ["a", "b"].into_iter().map(String::from).collect();
    let cloned = vec.clone();

    assert_eq!(vec, cloned);
    assert_eq!(cloned.cap(), vec.cap(), "Clones should keep the capacity.");
    assert_eq!(format!("{vec}"), r#"["a", "b"]"#);
    assert_eq!(
        format!("{vec:?}"),
        r#"Vector { contents: ["a", "b"], len: 2, cap: 5 }"#
    );
}

#[test]
fn test_remove_item_drops() {
    #[derive(Debug)]
    struct Tagged(u8, CountedDrop);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = (0..4).map(|i| Tagged(i, counter.clone())).collect();
    let key = Tagged(2, counter.clone());

    assert!(vec.remove_item(&key));
    assert_eq!(counter.drops(), 1, "The removed element should be dropped exactly once.");
    assert!(!vec.remove_item(&key));
    assert_eq!(counter.drops(), 1, "A missed removal shouldn't drop anything.");
    assert_eq!(vec.len(), 3);
    assert!(vec.iter().map(|item| item.0).eq([0, 1, 3]));

    drop(vec);
    assert_eq!(counter.drops(), 4);
}
