use std::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;

use super::Array;
#[allow(unused)]
use crate::collections::contiguous::Vector;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let arr = self.forget_init();
        IntoIter {
            start: 0,
            end: arr.size(),
            arr,
        }
    }
}

/// An owned type for owned iteration over an [`Array`] or [`Vector`]. See [`Array::into_iter`] and
/// [`Vector::into_iter`].
pub struct IntoIter<T> {
    // Values in start..end are initialized and yet to be yielded, everything else has been moved
    // out or was never initialized.
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values which are yet to be yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start..end is within the Array and all values in that range are initialized.
        unsafe {
            std::slice::from_raw_parts(
                self.arr.ptr.add(self.start).as_ptr().cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values in start..end haven't been moved out and are initialized. The Array
            // itself only holds MaybeUninit values, so it won't drop them a second time.
            unsafe { ptr::drop_in_place(self.arr[i].as_mut_ptr()) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized, and incrementing start means it is never
            // read again, so the value is effectively moved off of the heap.
            let value = unsafe { self.arr[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the decremented end is initialized and is now outside of
            // start..end, so it won't be read again.
            let value = unsafe { self.arr[self.end].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Just use the iter and iter_mut definitions provided by Deref<Target=[T]>.
