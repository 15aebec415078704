use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};
use crate::collections::contiguous::Vector;

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            tree: self,
        }
    }
}

/// An owning iterator over the values of a [`BinarySearchTree`], smallest first.
pub struct IntoIter<T: Ord> {
    pub(crate) tree: BinarySearchTree<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T: Ord> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_max()
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vector::new(),
            len: self.len,
        };
        iter.push_left(&self.root);
        iter
    }
}

/// An iterator over references to the values of a [`BinarySearchTree`], smallest first.
pub struct Iter<'a, T: Ord> {
    // The nodes whose values are still to come, with the next one on top. None of their right
    // subtrees have been visited yet.
    pub(crate) stack: Vector<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    pub(crate) fn push_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        self.push_left(&node.right);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: Ord> FusedIterator for Iter<'a, T> {}

impl<'a, T: Ord> ExactSizeIterator for Iter<'a, T> {}
