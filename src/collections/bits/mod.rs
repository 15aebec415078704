//! A module containing [`BitVector`], a fixed-size set of bits packed into words, and its
//! iterator.

mod bit_vector;
mod iter;

pub use bit_vector::*;
pub use iter::*;
