use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Vector;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub fn leaf(value: T) -> Node<T> {
        Node {
            left: None.into(),
            right: None.into(),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Adds `value` as a new leaf. Values equal to an existing one go to its left.
    pub fn insert(&mut self, value: T) {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Greater => node.right.insert(value),
                Ordering::Less | Ordering::Equal => node.left.insert(value),
            },
            None => self.0 = Some(Box::new(Node::leaf(value))),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Greater => node.right.contains(value),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    /// Removes the first node found holding a value equal to `value`, returning that value. A node
    /// with two children takes the smallest value of its right subtree in place of the removed one.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = self.0.as_mut()?;

        match value.cmp(&node.value) {
            Ordering::Less => node.left.remove(value),
            Ordering::Greater => node.right.remove(value),
            Ordering::Equal => match node.right.take_min() {
                Some(successor) => Some(mem::replace(&mut node.value, successor)),
                None => {
                    let Node { left, value: removed, .. } = *self.0.take()?;
                    *self = left;
                    Some(removed)
                },
            },
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Unlinks the leftmost node of this branch, putting its right subtree in its place.
    pub fn take_min(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.is_some() {
            return node.left.take_min();
        }

        let Node { right, value, .. } = *self.0.take()?;
        *self = right;
        Some(value)
    }

    /// Unlinks the rightmost node of this branch, putting its left subtree in its place.
    pub fn take_max(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.right.is_some() {
            return node.right.take_max();
        }

        let Node { left, value, .. } = *self.0.take()?;
        *self = left;
        Some(value)
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Clone> Clone for Branch<T> {
    fn clone(&self) -> Self {
        Branch(self.0.as_ref().map(|node| Box::new(Node {
            left: node.left.clone(),
            right: node.right.clone(),
            value: node.value.clone(),
        })))
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
