use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::Iter;
use crate::collections::contiguous::{Array, Vector};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

type Word = u32;

const WORD_BITS: usize = Word::BITS as usize;

/// A fixed number of bits, packed into [`u32`] words. Bit `i` is stored in word `i / 32`, at the
/// position `i % 32` counting from the least significant bit. Any bits of the last word past
/// [`len`](BitVector::len) are always unset.
///
/// # Examples
/// ```
/// # use basic_collections::collections::bits::BitVector;
/// let mut bits = BitVector::new(40);
/// bits.set_bit(3);
/// bits.set(35, true);
/// bits.toggle(3);
///
/// assert!(!bits[3]);
/// assert!(bits[35]);
/// assert_eq!(bits.count_ones(), 1);
/// ```
pub struct BitVector {
    pub(crate) words: Array<Word>,
    pub(crate) len: usize,
}

impl BitVector {
    /// Creates a new BitVector holding `len` unset bits.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new(len: usize) -> BitVector {
        BitVector {
            words: Array::repeat_item(0, len.div_ceil(WORD_BITS)),
            len,
        }
    }

    /// Returns the number of bits in the BitVector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BitVector holds no bits at all.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`BitVector::try_get`].
    #[track_caller]
    pub fn get(&self, index: usize) -> bool {
        self.try_get(index).throw()
    }

    /// Returns the bit at `index`, or an error if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<bool, IndexOutOfBounds> {
        let (word, mask) = self.locate(index)?;
        Ok(self.words[word] & mask != 0)
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`BitVector::try_set`].
    #[track_caller]
    pub fn set(&mut self, index: usize, value: bool) {
        self.try_set(index, value).throw()
    }

    /// Sets the bit at `index` to `value`, or returns an error if `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, value: bool) -> Result<(), IndexOutOfBounds> {
        let (word, mask) = self.locate(index)?;

        match value {
            true => self.words[word] |= mask,
            false => self.words[word] &= !mask,
        }
        Ok(())
    }

    /// Sets the bit at `index` to 1.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn set_bit(&mut self, index: usize) {
        self.set(index, true)
    }

    /// Sets the bit at `index` to 0.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn unset_bit(&mut self, index: usize) {
        self.set(index, false)
    }

    /// Inverts the bit at `index`, returning its new value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`BitVector::try_toggle`].
    #[track_caller]
    pub fn toggle(&mut self, index: usize) -> bool {
        self.try_toggle(index).throw()
    }

    /// Inverts the bit at `index`, returning its new value, or returns an error if `index` is out
    /// of bounds.
    pub fn try_toggle(&mut self, index: usize) -> Result<bool, IndexOutOfBounds> {
        let (word, mask) = self.locate(index)?;

        self.words[word] ^= mask;
        Ok(self.words[word] & mask != 0)
    }

    /// Sets every bit to `value`.
    pub fn fill(&mut self, value: bool) {
        let word = match value {
            true => Word::MAX,
            false => 0,
        };
        self.words.fill(word);
        self.clear_unused();
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns an iterator over the bits, from index 0 upwards.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl BitVector {
    /// Returns the word that holds the bit at `index`, and the mask that selects it.
    pub(crate) const fn locate(&self, index: usize) -> Result<(usize, Word), IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok((index / WORD_BITS, 1 << (index % WORD_BITS)))
    }

    /// Unsets the bits of the last word that are past the end of the BitVector.
    pub(crate) fn clear_unused(&mut self) {
        let used = self.len % WORD_BITS;
        if used == 0 {
            return;
        }

        if let Some(last) = self.words.last_mut() {
            *last &= (1 << used) - 1;
        }
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    /// Returns a reference to a static bool matching the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            true => &true,
            false => &false,
        }
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let values: Vector<bool> = iter.into_iter().collect();
        let mut bits = BitVector::new(values.len());

        for (index, value) in values.into_iter().enumerate() {
            if value {
                bits.set_bit(index);
            }
        }
        bits
    }
}

impl Clone for BitVector {
    fn clone(&self) -> Self {
        BitVector {
            words: self.words.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        // Unused bits are always unset, so equal bits mean equal words.
        self.len == other.len && self.words == other.words
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.words.hash(state);
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("bits", &format_args!("{self}"))
            .field("len", &self.len)
            .finish()
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}
