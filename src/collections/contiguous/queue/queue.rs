use std::fmt::{self, Debug, Formatter};

use super::Iter;
use crate::collections::contiguous::Array;
use crate::util::capacity::{self, DEFAULT_CAP};
use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::result::ResultExtension;

/// A first-in-first-out collection, stored as a circular buffer.
///
/// Values are enqueued at the back and dequeued from the front. The occupied slots may wrap around
/// the end of the buffer, so dequeuing never moves other values. When the buffer is full it grows
/// by the same rule as [`Vector`](super::super::Vector), unrolling the wrapped values into order
/// at the start of the new buffer.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the Queue doesn't have enough capacity for the new element, `enqueue` will take `O(n)`.
pub struct Queue<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue with the default capacity.
    pub fn new() -> Queue<T> {
        Queue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty Queue with room for `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            arr: Array::repeat_default(cap),
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of values in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the Queue.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the Queue is full and can't grow any further.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.dequeue(), Some('a'));
    /// assert_eq!(queue.peek(), Some(&'b'));
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).throw()
    }

    /// Adds `value` to the back of the Queue, or returns an error if the Queue can't grow.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.grow()?;
        }

        let index = self.physical_index(self.len);
        self.arr[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the value at the front of the Queue and returns it, if there is one.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.arr[self.head].take();
        self.head = self.physical_index(1);
        self.len -= 1;
        value
    }

    /// Removes the value at the front of the Queue, returning an error if the Queue is empty.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.dequeue().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value at the front of the Queue, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the value at the front of the Queue, or an error if it is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value `offset` places behind the front of the Queue.
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }

        self.arr[self.physical_index(offset)].as_ref()
    }

    /// Returns true if the Queue contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Removes every value and resets the capacity to the default.
    pub fn clear(&mut self) {
        *self = Queue::new();
    }

    /// Returns an iterator over the values of the Queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Maps an offset from the front of the Queue to an index into the buffer.
    pub(crate) const fn physical_index(&self, offset: usize) -> usize {
        // The buffer is never empty while there are values to find.
        (self.head + offset) % self.arr.size()
    }

    /// Moves every value into a larger buffer, front first, so that the Queue no longer wraps.
    pub(crate) fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = capacity::grown_cap(self.cap(), capacity::max_cap::<Option<T>>())?;
        let mut new_arr = Array::repeat_default(new_cap);

        for (offset, slot) in new_arr.iter_mut().take(self.len).enumerate() {
            let index = self.physical_index(offset);
            *slot = self.arr[index].take();
        }

        self.arr = new_arr;
        self.head = 0;
        Ok(())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        let mut queue = Queue::with_cap(self.cap());
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("buffer", &&*self.arr)
            .field("head", &self.head)
            .field("len", &self.len)
            .finish()
    }
}
