//! A module containing [`Queue`], a first-in-first-out circular buffer, and its iterators.

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;
