//! `BitSet<S>`: index-addressed bits over a [`BitStorage`].
//!
//! Every flag design translates its flags into bit indices and stores them in
//! a `BitSet`. The set itself knows nothing about flags.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use super::bits::BitStorage;

/// Fixed-width set of bit indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct BitSet<S> {
    bits: S,
}

impl<S: BitStorage> BitSet<S> {
    /// Empty set.
    #[inline]
    pub fn empty() -> Self {
        Self { bits: S::ZERO }
    }

    /// Set containing only `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= S::BITS`.
    #[inline]
    pub fn from_index(index: u32) -> Self {
        Self { bits: S::bit(index) }
    }

    /// Set containing every index in `indices`.
    pub fn from_indices(indices: &[u32]) -> Self {
        indices
            .iter()
            .fold(Self::empty(), |set, &index| set.with(index))
    }

    /// Set containing indices `0..count`.
    #[inline]
    pub fn low(count: u32) -> Self {
        Self { bits: S::low_mask(count) }
    }

    /// Raw storage.
    #[inline]
    pub fn bits(self) -> S {
        self.bits
    }

    /// Wrap raw storage as is.
    #[inline]
    pub const fn from_bits(bits: S) -> Self {
        Self { bits }
    }

    /// Whether `index` is in the set.
    #[inline]
    pub fn test(self, index: u32) -> bool {
        self.bits.test(index)
    }

    /// Copy with `index` added.
    #[inline]
    pub fn with(self, index: u32) -> Self {
        self | Self::from_index(index)
    }

    /// Copy with `index` removed.
    #[inline]
    pub fn without(self, index: u32) -> Self {
        self & !Self::from_index(index)
    }

    /// Copy with `index` toggled.
    #[inline]
    pub fn toggled(self, index: u32) -> Self {
        self ^ Self::from_index(index)
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        Self { bits: self.bits & other.bits }
    }

    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self { bits: self.bits & !other.bits }
    }

    #[inline]
    pub fn symmetric_difference(self, other: Self) -> Self {
        Self { bits: self.bits ^ other.bits }
    }

    /// Every bit of the storage flipped, including bits past any flag count.
    #[inline]
    pub fn complement(self) -> Self {
        Self { bits: !self.bits }
    }

    /// Whether every index of `other` is in `self`.
    #[inline]
    pub fn contains_all(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Whether `self` and `other` share an index.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != S::ZERO
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == S::ZERO
    }

    /// Number of indices in the set.
    #[inline]
    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Set indices in ascending order.
    #[inline]
    pub fn ones(self) -> Ones<S> {
        Ones { rest: self.bits }
    }
}

impl<S: BitStorage> BitOr for BitSet<S> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<S: BitStorage> BitAnd for BitSet<S> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<S: BitStorage> BitXor for BitSet<S> {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl<S: BitStorage> Not for BitSet<S> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl<S: BitStorage> fmt::Debug for BitSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet({:#b})", self.bits)
    }
}

/// Iterator over the set indices of a [`BitSet`].
#[derive(Debug, Clone)]
pub struct Ones<S> {
    rest: S,
}

impl<S: BitStorage> Iterator for Ones<S> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.rest == S::ZERO {
            return None;
        }
        let index = self.rest.lowest_set_index();
        self.rest = self.rest & !S::bit(index);
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.count_ones() as usize;
        (n, Some(n))
    }
}

impl<S: BitStorage> ExactSizeIterator for Ones<S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_index_operations() {
        let set = BitSet::<u32>::from_index(3);
        assert!(set.test(3));
        assert!(!set.test(2));
        assert_eq!(set.with(1).bits(), 0b1010);
        assert_eq!(set.without(3), BitSet::empty());
        assert_eq!(set.toggled(0).bits(), 0b1001);
        assert_eq!(set.toggled(3), BitSet::empty());
    }

    #[test]
    fn set_algebra() {
        let a = BitSet::<u8>::from_indices(&[0, 1, 4]);
        let b = BitSet::<u8>::from_indices(&[1, 2]);
        assert_eq!((a | b).bits(), 0b10111);
        assert_eq!((a & b).bits(), 0b00010);
        assert_eq!((a ^ b).bits(), 0b10101);
        assert_eq!(a.difference(b).bits(), 0b10001);
        assert!(a.contains_all(BitSet::from_index(4)));
        assert!(!a.contains_all(b));
        assert!(a.intersects(b));
        assert!(!a.intersects(BitSet::from_index(7)));
    }

    #[test]
    fn ones_walks_in_ascending_order() {
        let set = BitSet::<u128>::from_indices(&[127, 0, 64, 5]);
        let collected: Vec<u32> = set.ones().collect();
        assert_eq!(collected, vec![0, 5, 64, 127]);
        assert_eq!(set.ones().len(), 4);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn low_and_complement() {
        assert_eq!(BitSet::<u16>::low(5).bits(), 0b11111);
        assert_eq!(BitSet::<u8>::empty().complement().bits(), 0xFF);
        assert!(BitSet::<u64>::low(0).is_empty());
    }
}
