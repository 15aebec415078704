//! A module containing [`BinaryHeap`], a priority queue stored in a [`Vector`](super::contiguous::Vector),
//! and [`HeapKind`] for choosing which end of the ordering sits at its root.

mod binary_heap;

pub use binary_heap::*;
