//! Fixed-size bit vectors for covering-table rows, columns and literal masks.
//!
//! A [`BitVector`] holds exactly [`size`][BitVector::size] bits packed into `u64` words.
//! The size is chosen once at construction and never changes: reading or writing
//! an index past the end is a programming error and panics, just like slice indexing.
//!
//! Bits of the last word that lie beyond `size` are always kept zero, so
//! [`cardinality`][BitVector::cardinality], [`is_zero`][BitVector::is_zero] and equality
//! only ever observe logical bits, even after [`invert`][BitVector::invert].
//!
//! # Examples
//!
//! ```
//! use qm_cover::bitvec::BitVector;
//!
//! let mut v = BitVector::new(70);
//! v.set(3);
//! v.set(65);
//! assert_eq!(v.cardinality(), 2);
//! assert_eq!(v.first_set(), Some(3));
//!
//! let all = &v | &!&v;
//! assert_eq!(all, BitVector::filled(70));
//! ```

use std::cmp::min;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A fixed-size bit vector backed by a vector of u64 words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    /// Storage: each u64 holds 64 bits, bit `i` lives in word `i / 64`
    words: Vec<u64>,
    /// Logical number of bits
    size: usize,
}

impl BitVector {
    /// Number of bits per word.
    pub const BITS_PER_WORD: usize = 64;

    /// Creates a zero-filled bit vector of `size` bits.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; Self::word_count(size)],
            size,
        }
    }

    /// Creates a bit vector of `size` bits, all set.
    pub fn filled(size: usize) -> Self {
        let mut bv = Self {
            words: vec![u64::MAX; Self::word_count(size)],
            size,
        };
        bv.clear_excess_bits();
        bv
    }

    /// Creates a bit vector of `size` bits from raw words, lowest bits first.
    ///
    /// Missing words are zero-filled, surplus words are dropped and bits beyond
    /// `size` are cleared.
    pub fn from_words(size: usize, words: impl IntoIterator<Item = u64>) -> Self {
        let num_words = Self::word_count(size);
        let mut words: Vec<u64> = words.into_iter().take(num_words).collect();
        words.resize(num_words, 0);
        let mut bv = Self { words, size };
        bv.clear_excess_bits();
        bv
    }

    /// Creates a bit vector of `size` bits with the given indices set.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= size`.
    pub fn from_indices(size: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut bv = Self::new(size);
        for index in indices {
            bv.set(index);
        }
        bv
    }

    #[inline]
    fn word_count(size: usize) -> usize {
        (size + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Zeroes the padding bits of the last word.
    fn clear_excess_bits(&mut self) {
        let used = self.size % Self::BITS_PER_WORD;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.size,
            "bit index {} out of range for bit vector of size {}",
            index,
            self.size
        );
    }

    /// Returns the logical number of bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the backing words, lowest bits first.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.check_index(index);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.check_index(index);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        self.words[word_idx] |= 1u64 << bit_idx;
    }

    /// Clears the bit at the given index.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        self.check_index(index);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        self.words[word_idx] &= !(1u64 << bit_idx);
    }

    /// Sets every bit in `lo..=hi`.
    pub fn set_range(&mut self, lo: usize, hi: usize) {
        for index in lo..=hi {
            self.set(index);
        }
    }

    /// Clears every bit in `lo..=hi`.
    pub fn clear_range(&mut self, lo: usize, hi: usize) {
        for index in lo..=hi {
            self.clear(index);
        }
    }

    /// Returns true if no bits are set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Complements every bit in place.
    pub fn invert(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_excess_bits();
    }

    /// Returns the number of set bits.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the index of the lowest set bit, or `None` if no bit is set.
    pub fn first_set(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, &word)| word != 0)
            .map(|(word_idx, word)| word_idx * Self::BITS_PER_WORD + word.trailing_zeros() as usize)
    }

    /// Combines two vectors word by word over the shorter of the two sizes.
    fn zip_with(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let size = min(self.size, other.size);
        let num_words = Self::word_count(size);
        let words = self.words[..num_words]
            .iter()
            .zip(&other.words[..num_words])
            .map(|(&a, &b)| op(a, b));
        Self::from_words(size, words)
    }

    /// Returns a new vector with the bits set in either operand.
    ///
    /// The result has the smaller of the two sizes.
    pub fn union(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    /// Returns a new vector with the bits set in both operands.
    ///
    /// The result has the smaller of the two sizes.
    pub fn intersection(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    /// Returns a new vector with the bits set in exactly one operand.
    ///
    /// The result has the smaller of the two sizes.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Returns true if every bit set in `other` is also set in `self`.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        assert_eq!(self.size, other.size, "bit vector sizes differ");
        self.words.iter().zip(&other.words).all(|(&a, &b)| b & !a == 0)
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter(&self) -> BitVectorIter<'_> {
        BitVectorIter {
            bitvec: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a [`BitVector`].
pub struct BitVectorIter<'a> {
    bitvec: &'a BitVector,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitVectorIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitVector::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitvec.words.len() {
                return None;
            }
            self.current_word = self.bitvec.words[self.word_idx];
        }
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = usize;
    type IntoIter = BitVectorIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for &BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitXor for &BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        let mut res = self.clone();
        res.invert();
        res
    }
}

/// Logical bits, index 0 first: `0110`.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.size {
            f.write_str(if self.get(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Raw words in hex, lowest word first: `[ff,1]`.
impl fmt::LowerHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:x}", word)?;
        }
        write!(f, "]")
    }
}

/// Raw words in binary, lowest word first: `[101,0]`.
impl fmt::Binary for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:b}", word)?;
        }
        write!(f, "]")
    }
}
