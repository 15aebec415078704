//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as allocation, amortized growth, iterators and hashing.
//!
//! # Method
//! Array-backed types implement [`Deref<Target = [T]>`](std::ops::Deref) where their contents are
//! contiguous, which saves me from writing some of the more repetitive functionality.

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "bits")]
pub mod bits;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::capacity::DEFAULT_CAP;
#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, CollectionError, EmptyCollection, IndexOrCapOverflow, IndexOutOfBounds,
    InvalidArgument, KeyNotFound,
};
