use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, EmptyCollection, InvalidArgument};

/// A last-in-first-out collection. Values are pushed onto and popped off of the top of the Stack,
/// which is the end of an internal [`Vector`], so it grows by the same rule.
///
/// Iteration, both borrowed and owned, visits values from the top of the Stack to the bottom.
pub struct Stack<T> {
    pub(crate) vec: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack with the default capacity.
    pub fn new() -> Stack<T> {
        Stack {
            vec: Vector::new(),
        }
    }

    /// Creates a new, empty Stack with room for `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            vec: Vector::with_cap(cap),
        }
    }

    /// Returns the number of values on the Stack.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the Stack is empty.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns the capacity of the Stack.
    pub const fn cap(&self) -> usize {
        self.vec.cap()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the Stack is full and can't grow any further.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, value: T) {
        self.vec.push(value)
    }

    /// Pushes `value` onto the top of the Stack, or returns an error if the Stack can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.vec.try_push(value)
    }

    /// Removes the value on the top of the Stack and returns it, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Removes the value on the top of the Stack, returning an error if the Stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value on the top of the Stack, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.vec.last()
    }

    /// Returns a mutable reference to the value on the top of the Stack, if there is one.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }

    /// Returns a reference to the value on the top of the Stack, or an error if it is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    /// Returns true if the Stack contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.vec.contains(value)
    }

    /// Removes every value and resets the capacity to the default.
    pub fn clear(&mut self) {
        self.vec.clear()
    }

    /// Returns an iterator over the values of the Stack, from top to bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.vec.iter().rev()
    }

    /// Clones every value into `dest` starting at `offset`, in the order they would be popped.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `offset` is outside of `dest` or `dest` doesn't have room for
    /// every value after `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), InvalidArgument>
    where
        T: Clone,
    {
        self.vec.copy_to(dest, offset)?;
        dest[offset..offset + self.len()].reverse();
        Ok(())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            vec: Vector::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = Rev<<Vector<T> as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            vec: self.vec.clone(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("bottom_to_top", &&*self.vec)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
