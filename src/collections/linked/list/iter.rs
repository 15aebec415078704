use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{LinkedList, Slot};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over the elements of a [`LinkedList`], from front to back.
pub struct IntoIter<T> {
    // The list already knows how to hand out its values in order.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            next: self.head,
            len: self.len,
        }
    }
}

/// An iterator over references to the elements of a [`LinkedList`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) next: Option<usize>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;

        self.next = self.list.next(index);
        self.len -= 1;
        Some(self.list.value(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            next: self.next,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            slots: NonNull::from(&mut *self.slots).cast(),
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedList`], from front to back.
pub struct IterMut<'a, T> {
    // Points to the first slot of the list's arena, which is borrowed mutably for 'a.
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) next: Option<usize>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;

        // SAFETY: index was reached by following links from the head, so it is within the arena.
        // The links never form a cycle, so no slot is visited twice and each mutable reference
        // handed out is unique. The arena stays borrowed for 'a.
        let slot = unsafe { &mut *self.slots.as_ptr().add(index) };

        match slot {
            Slot::Occupied { value, next } => {
                self.next = *next;
                self.len -= 1;
                Some(value)
            },
            Slot::Vacant { .. } => {
                self.next = None;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
