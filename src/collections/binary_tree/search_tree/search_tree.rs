use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter};
use crate::collections::contiguous::Vector;

/// An unbalanced binary search tree. Every value in a node's left subtree is less than or equal to
/// it, and every value in its right subtree is greater, so equal values can be stored more than
/// once.
///
/// The tree doesn't rebalance itself, so inserting values in sorted order produces a tree as tall
/// as it is long.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the tree.
/// - `h`: The height of the tree, between `log n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` to the tree as a new leaf.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// for value in [5, 3, 8, 3] {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.len(), 4);
    /// assert!(tree.iter().eq(&[3, 3, 5, 8]));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.len += 1;
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Removes one value equal to `value` from the tree, returning true if one was found. The
    /// length is only decremented if a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.root.remove(value) {
            Some(_) => {
                self.len -= 1;
                true
            },
            None => false,
        }
    }

    /// Returns a reference to the smallest value in the tree, if there is one.
    pub fn min(&self) -> Option<&T> {
        self.root.min()
    }

    /// Returns a reference to the largest value in the tree, if there is one.
    pub fn max(&self) -> Option<&T> {
        self.root.max()
    }

    /// Removes and returns the smallest value in the tree, if there is one.
    pub fn pop_min(&mut self) -> Option<T> {
        let min = self.root.take_min()?;
        self.len -= 1;
        Some(min)
    }

    /// Removes and returns the largest value in the tree, if there is one.
    pub fn pop_max(&mut self) -> Option<T> {
        let max = self.root.take_max()?;
        self.len -= 1;
        Some(max)
    }

    /// Returns the number of levels in the tree, which is 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = BinarySearchTree::new();
    }

    /// Returns references to every value in the tree, smallest first.
    pub fn in_order(&self) -> Vector<&T> {
        let mut values = Vector::with_cap(self.len);
        values.extend(self.iter());
        values
    }

    /// Returns an iterator over the values of the tree, smallest first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.root)
    }
}

impl<T: Ord + Display> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
