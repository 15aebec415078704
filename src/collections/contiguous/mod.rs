//! Contiguous collection types. [`Array`] is a fixed-size buffer sized at runtime, [`Vector`] grows
//! as elements are added, and [`Stack`] and [`Queue`] build LIFO and FIFO access on the same
//! growth rule.
#![warn(missing_docs)]

pub mod array;
pub mod queue;
pub mod stack;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use vector::Vector;
