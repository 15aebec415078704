use std::fmt::{self, Debug, Formatter};
use std::slice;

use derive_more::IsVariant;

use crate::collections::contiguous::Vector;
use crate::util::capacity::DEFAULT_CAP;
use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::result::ResultExtension;

/// Which value a [`BinaryHeap`] keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum HeapKind {
    /// The smallest value is at the root, so values are popped in ascending order.
    Min,
    /// The largest value is at the root, so values are popped in descending order.
    Max,
}

/// A binary heap, stored level by level in a [`Vector`]. The children of the value at index `i`
/// are at `2i + 1` and `2i + 2`, and every value precedes its children in the order given by the
/// heap's [`HeapKind`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinaryHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(log n)`* |
/// | `peek` | `O(1)` |
/// | `pop` | `O(log n)` |
/// | `remove` | `O(n)` |
///
/// \* Unless the heap has to grow, in which case it is `O(n)`.
pub struct BinaryHeap<T: Ord> {
    pub(crate) vec: Vector<T>,
    pub(crate) kind: HeapKind,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates a new, empty heap of the provided `kind`, with the default capacity.
    pub fn new(kind: HeapKind) -> BinaryHeap<T> {
        BinaryHeap::with_cap(kind, DEFAULT_CAP)
    }

    /// Creates a new, empty heap of the provided `kind`, with room for `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(kind: HeapKind, cap: usize) -> BinaryHeap<T> {
        BinaryHeap {
            vec: Vector::with_cap(cap),
            kind,
        }
    }

    /// Returns the number of values in the heap.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the heap is empty.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns the capacity of the heap.
    pub const fn cap(&self) -> usize {
        self.vec.cap()
    }

    /// Returns the kind of the heap.
    pub const fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the number of levels in the heap, which is 0 for an empty heap and 1 for a heap with
    /// only a root.
    pub const fn height(&self) -> usize {
        (usize::BITS - self.len().leading_zeros()) as usize
    }

    /// Adds `value` to the heap.
    ///
    /// # Panics
    /// Panics if the heap is full and can't grow any further.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::heap::{BinaryHeap, HeapKind};
    /// let mut heap = BinaryHeap::new(HeapKind::Max);
    /// heap.push(3);
    /// heap.push(7);
    /// heap.push(5);
    /// assert_eq!(heap.peek(), Some(&7));
    /// assert_eq!(heap.pop(), Some(7));
    /// assert_eq!(heap.pop(), Some(5));
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Adds `value` to the heap, or returns an error if the heap can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.vec.try_push(value)?;
        self.sift_up(self.vec.len() - 1);
        Ok(())
    }

    /// Returns a reference to the root of the heap, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.vec.first()
    }

    /// Returns a reference to the root of the heap, or an error if the heap is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    /// Removes the root of the heap and returns it, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.vec.len().checked_sub(1)?;

        self.vec.swap(0, last);
        let root = self.vec.pop();
        self.sift_down(0);
        root
    }

    /// Removes the root of the heap and returns it, or returns an error if the heap is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    /// Removes one value equal to `value` from the heap, returning true if one was found.
    ///
    /// The last value in the heap takes the place of the removed one, and is then moved up or down
    /// until the heap is in order again.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.vec.iter().position(|item| item == value) else {
            return false;
        };

        let last = self.vec.len() - 1;
        self.vec.swap(index, last);
        self.vec.pop();

        if index < self.vec.len() && self.sift_down(index) == index {
            self.sift_up(index);
        }
        true
    }

    /// Returns true if the heap contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.vec.contains(value)
    }

    /// Removes every value and returns the heap to the default capacity.
    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Returns an iterator over the values of the heap in storage order, which starts with the root
    /// but is otherwise only partially ordered.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Consumes the heap and returns its values in the order they would be popped.
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Returns true if `a` belongs closer to the root than `b`.
    pub(crate) fn precedes(&self, a: &T, b: &T) -> bool {
        match self.kind {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }

    /// Moves the value at `index` towards the root until its parent precedes it.
    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(&self.vec[index], &self.vec[parent]) {
                break;
            }

            self.vec.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the value at `index` away from the root until it precedes both of its children,
    /// returning the index where it stops.
    pub(crate) fn sift_down(&mut self, mut index: usize) -> usize {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < self.len() && self.precedes(&self.vec[left], &self.vec[best]) {
                best = left;
            }
            if right < self.len() && self.precedes(&self.vec[right], &self.vec[best]) {
                best = right;
            }

            if best == index {
                return index;
            }

            self.vec.swap(index, best);
            index = best;
        }
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        BinaryHeap {
            vec: self.vec.clone(),
            kind: self.kind,
        }
    }
}

impl<T: Ord + Debug> Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("kind", &self.kind)
            .field("contents", &&*self.vec)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
