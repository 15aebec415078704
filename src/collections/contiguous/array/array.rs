use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Array is the backing storage of most other collections in this crate. It never grows on its
/// own, but an uninitialized Array can be [`realloc`](Array::realloc)ated to a new size.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* The allocator may be able to resize in place, but that isn't something we can rely on.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size).throw();
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new `Array<T>` of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let mut next = 0;
    /// let arr = Array::repeat_with(|| { next += 2; next }, 3);
    /// assert_eq!(&*arr, &[2, 4, 6]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Array<T> {
        let mut arr = Self::new_uninit(count);

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: Every value has been written above. If f panics, the partially initialized
        // Array<MaybeUninit<T>> is dropped without dropping any values, which only leaks them.
        unsafe { arr.assume_init() }
    }

    /// Creates an Array holding exactly the items produced by an [`ExactSizeIterator`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator produces fewer
    /// items than it reported.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr = Array::from_exact([1, 2, 3].into_iter());
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    pub fn from_exact<I: ExactSizeIterator<Item = T>>(iter: I) -> Array<T> {
        let size = iter.len();
        let mut arr = Self::new_uninit(size);
        let mut written = 0;

        for (slot, item) in arr.iter_mut().zip(iter) {
            slot.write(item);
            written += 1;
        }

        // Any values that were written are leaked rather than read as uninitialized memory.
        assert_eq!(written, size, "Iterator produced fewer items than its reported length!");

        // SAFETY: All size values have been written.
        unsafe { arr.assume_init() }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    /// This allows [`Array::realloc`] to be called on a previously initialized Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        // SAFETY: Array<T> has the same layout as Array<MaybeUninit<T>>.
        unsafe { mem::transmute::<Array<T>, Array<MaybeUninit<T>>>(self) }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if memory layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Copy> Array<T> {
    /// Creates a new `Array<T>` with `count` copies of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Self::repeat_with(|| item, count)
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::repeat_with(T::default, count)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        // SAFETY: Array<MaybeUninit<T>> has the same layout as Array<T>, the caller guarantees that
        // every value is initialized.
        unsafe { mem::transmute::<Array<MaybeUninit<T>>, Array<T>>(self) }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values in locations beyond `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. See [`Array::try_realloc`] for a non-panicking version.
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw()
    }

    /// Reallocate the Array to have size equal to `new_size`, returning an error rather than
    /// panicking if the new layout is too large. The Array is unchanged on an error.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), CapacityOverflow> {
        let old_layout = Self::make_layout(self.size)?;
        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types never allocate, only the size needs to be updated.
                self.ptr
            },
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // Release the old allocation and use a dangling pointer from now on.
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size because neither the old size nor size_of::<T>() is zero.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and ready to drop. The slice is entirely
        // contained within the allocation.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        // The layout was valid when the Array was allocated, so it still is.
        if let Ok(layout) = Self::make_layout(self.size) {
            if layout.size() != 0 {
                // SAFETY: ptr is always allocated in the global allocator and layout is the same
                // as when allocated. Zero-sized layouts aren't allocated and are guarded against
                // deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values. Data is properly initialized and the borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_exact(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
