#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insert_and_search() {
    let mut tree = BinarySearchTree::new();
    for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), 9);
    assert!(tree.contains(&6));
    assert!(tree.contains(&13));
    assert!(!tree.contains(&5));
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&14));
    assert_eq!(tree.height(), 4);
    assert_eq!(*tree.in_order(), [&1, &3, &4, &6, &7, &8, &10, &13, &14]);
}

#[test]
fn test_duplicates() {
    let mut tree: BinarySearchTree<_> = [5, 5, 3, 5].into_iter().collect();

    assert_eq!(tree.len(), 4);
    assert!(tree.iter().eq(&[3, 5, 5, 5]));
    assert!(tree.remove(&5));
    assert!(tree.remove(&5));
    assert_eq!(tree.len(), 2);
    assert!(tree.contains(&5), "Only one occurrence should be removed at a time.");
}

#[test]
fn test_remove() {
    let mut tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();

    assert!(tree.remove(&1), "Leaf nodes should be removable.");
    assert!(tree.remove(&14), "Nodes with one child should be replaced by it.");
    assert!(tree.remove(&3), "Nodes with two children should take their successor's value.");
    assert!(tree.remove(&8), "The root should be removable.");
    assert!(!tree.remove(&8));
    assert!(!tree.remove(&100));

    assert_eq!(tree.len(), 5, "Failed removals shouldn't change the length.");
    assert!(tree.iter().eq(&[4, 6, 7, 10, 13]));
    for value in [4, 6, 7, 10, 13] {
        assert!(tree.contains(&value), "{value} should still be found after removals.");
    }
}

#[test]
fn test_extraction() {
    let mut tree: BinarySearchTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();

    assert_eq!(tree.pop_min(), Some(1));
    assert_eq!(tree.pop_max(), Some(7));
    assert_eq!(tree.pop_min(), Some(2));
    assert_eq!(tree.len(), 4);
    assert!(tree.into_iter().rev().eq([6, 5, 4, 3]));

    let mut empty: BinarySearchTree<u8> = BinarySearchTree::new();
    assert_eq!(empty.pop_min(), None);
    assert_eq!(empty.pop_max(), None);
    assert_eq!(empty.min(), None);
    assert_eq!(empty.height(), 0);
    assert!(empty.in_order().is_empty());
}

#[test]
fn test_degenerate_height() {
    let tree: BinarySearchTree<_> = (0..32).collect();
    assert_eq!(tree.height(), 32, "Sorted insertion shouldn't be rebalanced.");
    assert!(tree.iter().copied().eq(0..32));
    assert_eq!(tree.iter().len(), 32);
}

#[test]
fn test_drop_and_clear() {
    #[derive(Debug)]
    struct Keyed(u8, CountedDrop);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let counter = CountedDrop::new();
    let mut tree: BinarySearchTree<_> = [3, 1, 2, 5, 4].into_iter()
        .map(|k| Keyed(k, counter.clone()))
        .collect();

    assert!(tree.remove(&Keyed(3, counter.clone())));
    assert_eq!(counter.drops(), 2, "The removed value and the search key should be dropped.");

    tree.clear();
    assert_eq!(counter.drops(), 6);
    assert!(tree.is_empty());
}

#[test]
fn test_format() {
    let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();

    assert_eq!(format!("{tree}"), "[1, 2, 3]");
    assert_eq!(
        format!("{:?}", tree.clone()),
        "┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    ┌    -\n└    (3)\n└    └    -"
    );
}
