//! Hash-based collection types. Currently just [`HashMap`], which resolves collisions by chaining
//! entries in a [`LinkedList`](crate::collections::linked::LinkedList) per bucket.

pub mod map;

#[doc(inline)]
pub use map::HashMap;
