use std::iter::FusedIterator;

use super::BitVector;

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            bits: self,
            start: 0,
            end: self.len,
        }
    }
}

/// An iterator over the bits of a [`BitVector`].
pub struct Iter<'a> {
    pub(crate) bits: &'a BitVector,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        let bit = self.bits.try_get(self.start).ok()?;
        self.start += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.end - self.start, Some(self.end - self.start))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        let bit = self.bits.try_get(self.end - 1).ok()?;
        self.end -= 1;
        Some(bit)
    }
}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> ExactSizeIterator for Iter<'a> {}
