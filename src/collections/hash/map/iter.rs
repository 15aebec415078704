use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::slice::Iter as ArrIter;
use std::slice::IterMut as ArrIterMut;

use super::{Bucket, HashMap};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

/// An owning iterator over the entries of a [`HashMap`], in bucket order.
pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<ArrIntoIter<Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.len -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut HashMap<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            inner: self.buckets.iter_mut().flatten(),
        }
    }
}

/// An iterator over the entries of a [`HashMap`], with mutable references to the values.
pub struct IterMut<'a, K, V> {
    pub(crate) inner: Flatten<ArrIterMut<'a, Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        self.len -= 1;
        Some((&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.buckets.iter().flatten(),
        }
    }
}

/// An iterator over the entries of a [`HashMap`], as references.
pub struct Iter<'a, K, V> {
    pub(crate) inner: Flatten<ArrIter<'a, Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        self.len -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An owning iterator over the keys of a [`HashMap`].
pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the keys of a [`HashMap`], as references.
pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An owning iterator over the values of a [`HashMap`].
pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of a [`HashMap`], as mutable references.
pub struct ValuesMut<'a, K, V>(
    pub(crate) IterMut<'a, K, V>
);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of a [`HashMap`], as references.
pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
