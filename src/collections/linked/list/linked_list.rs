use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{Iter, IterMut};
use crate::collections::contiguous::Vector;
use crate::util::error::InvalidArgument;

/// A singly linked list. Each element links to the one after it, so the list can be traversed from
/// front to back and elements can be unlinked from the middle without moving any others.
///
/// Rather than allocating every node separately, nodes are stored in slots of a [`Vector`] and link
/// to each other by index. Slots freed by removal are kept in a free list and reused by the next
/// insertion, so a list which has grown once doesn't allocate again until it outgrows its arena.
/// An empty list doesn't allocate at all.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `insert_after/before` | `O(n)` |
/// | `remove_matching` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Unless the arena has to grow, in which case it is `O(n)`.
pub struct LinkedList<T> {
    pub(crate) slots: Vector<Slot<T>>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) free: Option<usize>,
    pub(crate) len: usize,
}

pub(crate) enum Slot<T> {
    Occupied {
        value: T,
        next: Option<usize>,
    },
    Vacant {
        next_free: Option<usize>,
    },
}

use Slot::*;

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements. No memory is allocated until the first push.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            slots: Vector::with_cap(0),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        Some(self.value(self.head?))
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        Some(self.value_mut(self.head?))
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        Some(self.value(self.tail?))
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        Some(self.value_mut(self.tail?))
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let index = self.occupy(value, self.head);

        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.len += 1;
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_front(0);
    /// assert!(list.iter().eq(&[0, 1, 2]));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let index = self.occupy(value, None);

        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(None, head)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty. The list
    /// only links forwards, so this has to walk to the second last element first.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        let mut prev = None;
        let mut current = self.head;
        while let Some(index) = current {
            if index == tail {
                break;
            }
            prev = Some(index);
            current = self.next(index);
        }

        self.unlink(prev, tail)
    }

    /// Inserts `value` directly after the first element that matches `predicate`. If no element
    /// matches, the list is unchanged and `value` is handed back as an [`Err`].
    pub fn insert_after<P>(&mut self, predicate: P, value: T) -> Result<(), T>
    where
        P: FnMut(&T) -> bool,
    {
        let Some(anchor) = self.find_link(predicate).1 else {
            return Err(value);
        };

        let index = self.occupy(value, self.next(anchor));
        self.set_next(anchor, Some(index));
        if self.tail == Some(anchor) {
            self.tail = Some(index);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` directly before the first element that matches `predicate`. If no element
    /// matches, the list is unchanged and `value` is handed back as an [`Err`].
    pub fn insert_before<P>(&mut self, predicate: P, value: T) -> Result<(), T>
    where
        P: FnMut(&T) -> bool,
    {
        let (prev, anchor) = match self.find_link(predicate) {
            (prev, Some(anchor)) => (prev, anchor),
            (_, None) => return Err(value),
        };

        match prev {
            Some(prev) => {
                let index = self.occupy(value, Some(anchor));
                self.set_next(prev, Some(index));
                self.len += 1;
            },
            None => self.push_front(value),
        }
        Ok(())
    }

    /// Unlinks and returns the first element that matches `predicate`, or None if no element
    /// matches.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=5).collect();
    /// assert_eq!(list.remove_matching(|v| v % 2 == 0), Some(2));
    /// assert_eq!(list.remove_matching(|v| *v > 10), None);
    /// assert!(list.iter().eq(&[1, 3, 4, 5]));
    /// ```
    pub fn remove_matching<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_link(predicate) {
            (prev, Some(current)) => self.unlink(prev, current),
            (_, None) => None,
        }
    }

    /// Removes the first element equal to `value`, returning true if one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_matching(|item| item == value).is_some()
    }

    /// Returns a reference to the first element that matches `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.iter().find(predicate)
    }

    /// Returns a mutable reference to the first element that matches `predicate`.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(value))
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Clones every element into `dest` starting at `offset`, from front to back.
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

        for (slot, value) in target.iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    /// Returns an iterator over the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements of the list, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> LinkedList<T> {
    /// Walks the list until `predicate` matches, returning the index of the matching node and of
    /// the node before it. If nothing matches, the second index is None and the first is the tail.
    pub(crate) fn find_link<P>(&self, mut predicate: P) -> (Option<usize>, Option<usize>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;

        while let Some(index) = current {
            if predicate(self.value(index)) {
                break;
            }
            prev = Some(index);
            current = self.next(index);
        }

        (prev, current)
    }

    /// Unlinks the node at `index`, which must follow `prev`, and returns its value.
    pub(crate) fn unlink(&mut self, prev: Option<usize>, index: usize) -> Option<T> {
        let next = self.next(index);

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        if self.tail == Some(index) {
            self.tail = prev;
        }
        self.len -= 1;

        self.release(index)
    }

    /// Stores `value` in a free slot (or a new one at the end of the arena) linking to `next`, and
    /// returns the slot's index.
    pub(crate) fn occupy(&mut self, value: T, next: Option<usize>) -> usize {
        let slot = Occupied {
            value,
            next,
        };

        match self.free {
            Some(index) => {
                if let Vacant { next_free } = mem::replace(&mut self.slots[index], slot) {
                    self.free = next_free;
                }
                index
            },
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            },
        }
    }

    /// Marks the slot at `index` as free, returning the value it held.
    pub(crate) fn release(&mut self, index: usize) -> Option<T> {
        let vacant = Vacant {
            next_free: self.free,
        };

        match mem::replace(&mut self.slots[index], vacant) {
            Occupied { value, .. } => {
                self.free = Some(index);
                Some(value)
            },
            // The slot was already free, put it back the way it was.
            freed @ Vacant { .. } => {
                self.slots[index] = freed;
                None
            },
        }
    }

    pub(crate) fn next(&self, index: usize) -> Option<usize> {
        match &self.slots[index] {
            Occupied { next, .. } => *next,
            Vacant { .. } => None,
        }
    }

    pub(crate) fn set_next(&mut self, index: usize, new_next: Option<usize>) {
        if let Occupied { next, .. } = &mut self.slots[index] {
            *next = new_next;
        }
    }

    // Only ever called with indices reached by following links, which are always occupied.
    pub(crate) fn value(&self, index: usize) -> &T {
        match &self.slots[index] {
            Occupied { value, .. } => value,
            Vacant { .. } => unreachable!("Linked to a vacant slot!"),
        }
    }

    pub(crate) fn value_mut(&mut self, index: usize) -> &mut T {
        match &mut self.slots[index] {
            Occupied { value, .. } => value,
            Vacant { .. } => unreachable!("Linked to a vacant slot!"),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
