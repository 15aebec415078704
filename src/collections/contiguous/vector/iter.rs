use std::mem;

use super::Vector;
#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // The iterator takes ownership of all initialized values, so self is left with nothing to
        // drop when it goes out of scope.
        self.len = 0;

        IntoIter {
            arr: mem::take(&mut self.arr),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
