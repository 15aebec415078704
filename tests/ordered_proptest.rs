use basic_collections::collections::binary_tree::BinarySearchTree;
use basic_collections::collections::heap::{BinaryHeap, HeapKind};
use proptest::prelude::*;

// The heap and the search tree should both hand values back in sorted order, however they were
// inserted and whatever was removed in between.
proptest! {
    #[test]
    fn prop_heap_extracts_sorted(values in proptest::collection::vec(any::<i16>(), 0..200), removed in proptest::collection::vec(any::<i16>(), 0..20)) {
        let mut min = BinaryHeap::new(HeapKind::Min);
        let mut max = BinaryHeap::new(HeapKind::Max);
        min.extend(values.iter().copied());
        max.extend(values.iter().copied());

        let mut model = values.clone();
        for value in removed {
            let expected = match model.iter().position(|v| *v == value) {
                Some(index) => {
                    model.remove(index);
                    true
                },
                None => false,
            };
            prop_assert_eq!(min.remove(&value), expected);
            prop_assert_eq!(max.remove(&value), expected);
        }
        model.sort();

        prop_assert_eq!(&*min.into_sorted_vector(), &*model);
        model.reverse();
        prop_assert_eq!(&*max.into_sorted_vector(), &*model);
    }

    #[test]
    fn prop_tree_in_order_sorted(values in proptest::collection::vec(0u8..50u8, 0..200), removed in proptest::collection::vec(0u8..50u8, 0..50)) {
        let mut tree: BinarySearchTree<u8> = values.iter().copied().collect();
        let mut model = values.clone();

        for value in removed {
            let expected = match model.iter().position(|v| *v == value) {
                Some(index) => {
                    model.remove(index);
                    true
                },
                None => false,
            };
            prop_assert_eq!(tree.remove(&value), expected);
            prop_assert_eq!(tree.len(), model.len());
        }
        model.sort();

        prop_assert!(tree.iter().eq(model.iter()));
        prop_assert_eq!(tree.min(), model.first());
        prop_assert_eq!(tree.max(), model.last());
    }
}
