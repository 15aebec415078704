#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::CapacityOverflow;
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().len(), 5, "Should iterate over the right number of ZST instances.");

    let old_ptr = arr.ptr;
    let mut uninit = arr.forget_init();
    uninit.realloc(30);
    assert_eq!(
        uninit.ptr.cast::<ZeroSizedType>(),
        old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(uninit.size(), 30);
    arr = Array::repeat_default(30);
    assert_eq!(arr.into_iter().count(), 30);
}

#[test]
fn test_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(0);
    let dangling = arr.ptr;

    arr.realloc(10);
    assert_ne!(arr.ptr, dangling, "Pointer should be replaced with an allocated one.");
    for (i, slot) in arr.iter_mut().enumerate() {
        slot.write(i);
    }

    arr.realloc(15);
    for i in 0..10 {
        // SAFETY: The first 10 values were written before growing.
        assert_eq!(
            unsafe { arr[i].assume_init() },
            i,
            "When growing, all elements should remain in the Array."
        );
    }

    arr.realloc(4);
    // SAFETY: The first 4 values were written before shrinking.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3], "Shrinking should keep the leading elements.");

    let mut arr: Array<MaybeUninit<u64>> = Array::new_uninit(4);
    assert_eq!(
        arr.try_realloc(isize::MAX as usize),
        Err(CapacityOverflow),
        "Layouts larger than isize::MAX should be rejected."
    );
    assert_eq!(arr.size(), 4, "A failed reallocation should leave the Array unchanged.");

    assert_panics!({
        let mut arr: Array<MaybeUninit<u16>> = Array::new_uninit(5);
        arr.realloc(isize::MAX as usize);
    });

    arr.realloc(0);
    assert_eq!(arr.size(), 0);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr = Array::repeat_with(|| counter.clone(), 10);

    drop(arr);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from_exact(0_usize..5);

    assert_eq!(
        arr,
        Array::from_exact([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from_exact([0, 1, 2, 5, 4].into_iter()), Array::from_exact(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_exact(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_exact(0_usize..5);
    let collected = Array::from_exact(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let arr = Array::repeat_with(|| counter.clone(), 10);

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping a partially consumed owned iterator should drop every element once."
    );
}
