use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::capacity::{self, DEFAULT_CAP};
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds, InvalidArgument};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// When a push finds the Vector full, the capacity grows to `max(DEFAULT_CAP, ceil(cap * 1.5))`,
/// so that any sequence of `n` pushes copies `O(n)` elements in total while never holding more than
/// about half as many spare slots as values.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `set` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new, empty Vector with the default capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(DEFAULT_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation. A capacity of 0 doesn't allocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`]. See [`Vector::try_with_cap`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::try_with_cap(cap).throw()
    }

    /// Creates a new Vector with the provided capacity, or returns an error if that many values
    /// can't be allocated at once.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// # use basic_collections::collections::CapacityOverflow;
    /// assert_eq!(Vector::<u8>::try_with_cap(5).map(|v| v.cap()), Ok(5));
    /// assert_eq!(Vector::<u64>::try_with_cap(usize::MAX).err(), Some(CapacityOverflow));
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, CapacityOverflow> {
        if cap > capacity::max_cap::<T>() {
            return Err(CapacityOverflow);
        }

        Ok(Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        })
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value set on
    /// construction or by the most recent growth.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector is full and already at its maximum capacity. See
    /// [`Vector::try_push`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(5);
    /// for i in 0..6 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, returning an error instead of growing
    /// past the maximum capacity. The value is dropped if it can't be pushed.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.grow()?;
        }

        self.arr[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the value is no longer considered initialized.
            self.len -= 1;

            // SAFETY: The value at the old len - 1 is initialized, and won't be read again because
            // it is now outside of 0..len.
            Some(unsafe { self.arr[self.len].assume_init_read() })
        }
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// [`get`](slice::get) is available through deref for an [`Option`] instead.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, or an error if it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Overwrites the element at `index` with `value`, dropping the previous element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn set(&mut self, index: usize, value: T) {
        self.try_set(index, value).throw()
    }

    /// Overwrites the element at `index` with `value`, or returns an error if `index` is out of
    /// bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        *self.try_get_mut(index)? = value;
        Ok(())
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.try_get_mut(index).throw(), new_value)
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to a push.
    ///
    /// # Panics
    /// Panics if the provided index is greater than `len`, or if the Vector can't grow.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an error if the index is greater
    /// than `len` or the Vector can't grow.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.grow()?;
        }

        // Shift every value from index onwards one place to the right, carrying the new value into
        // index and the old last value into the uninitialized slot at len.
        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, or returns an error if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Removes and drops all elements, then resets the capacity to [`DEFAULT_CAP`].
    pub fn clear(&mut self) {
        *self = Vector::new();
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the required capacity exceeds the maximum capacity. See
    /// [`Vector::try_reserve`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements, returning an
    /// error if that isn't possible.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required <= self.cap() {
            return Ok(());
        }
        if required > capacity::max_cap::<T>() {
            return Err(CapacityOverflow);
        }

        self.arr.try_realloc(required)
    }

    /// Clones every element into `dest`, starting at `offset`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `offset` is outside of `dest` or `dest` doesn't have room for
    /// every element after `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), InvalidArgument>
    where
        T: Clone,
    {
        let target = dest.get_mut(offset..).ok_or(InvalidArgument {
            reason: "offset is outside of the destination slice",
        })?;
        let target = target.get_mut(..self.len).ok_or(InvalidArgument {
            reason: "destination slice is too short",
        })?;

        target.clone_from_slice(self);
        Ok(())
    }

    /// Returns the index of the first element equal to `value`, if any.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Removes the first element equal to `value`, returning true if one was found.
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                drop(self.remove(index));
                true
            },
            None => false,
        }
    }

    /// Grows the internal Array by the growth factor, allowing for the insertion of additional
    /// elements. After calling this, the Vector can take at least one more element.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the Vector is already at its maximum capacity.
    pub(crate) fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = capacity::grown_cap(self.cap(), capacity::max_cap::<T>())?;

        self.arr.try_realloc(new_cap)
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0.max(DEFAULT_CAP));

        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for slot in &mut self.arr[..self.len] {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { slot.assume_init_drop() }
        }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within the Array.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self prevents any other access.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
