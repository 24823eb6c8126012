//! Bit-number flag sets: the bit index of a variant is its discriminant.
//!
//! ```
//! use typeflags::{BitFlags, Enumerant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog, Wolf = 3 }
//!
//! let pack = BitFlags::<Animal>::from([Animal::Cat, Animal::Wolf]);
//! assert_eq!(pack.bits(), 0b1001);
//! assert!(pack.contains(Animal::Wolf));
//! assert!(!pack.contains(Animal::Dog));
//! ```
//!
//! Every discriminant has to fit the storage:
//!
//! ```compile_fail
//! use typeflags::{BitFlags, Enumerant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Wide { Low, High = 9 }
//!
//! let _ = BitFlags::<Wide, u8>::new(Wide::High);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::error::FlagError;
use crate::meta::value::Enumerant;
use crate::ops::impl_flag_operators;
use crate::primitives::bits::BitStorage;
use crate::primitives::bitset::BitSet;

/// Set of variants of `E`, one bit per discriminant, stored in `S`.
pub struct BitFlags<E, S = u64> {
    bits: BitSet<S>,
    _enum: PhantomData<fn() -> E>,
}

impl<E: Enumerant, S: BitStorage> BitFlags<E, S> {
    const CHECK: () = assert!(
        E::MIN_REPR >= 0 && E::MAX_REPR < S::BITS as i128,
        "enum discriminants do not fit the storage bits"
    );

    #[inline]
    fn index(flag: E) -> u32 {
        let () = Self::CHECK;
        flag.repr() as u32
    }

    #[inline]
    fn wrap(bits: BitSet<S>) -> Self {
        Self { bits, _enum: PhantomData }
    }

    /// Bits of every variant of `E`.
    fn known() -> BitSet<S> {
        E::VARIANTS
            .iter()
            .fold(BitSet::empty(), |set, &flag| set.with(Self::index(flag)))
    }

    /// Set holding only `flag`.
    #[inline]
    pub fn new(flag: E) -> Self {
        Self::wrap(BitSet::from_index(Self::index(flag)))
    }

    #[inline]
    pub fn empty() -> Self {
        Self::wrap(BitSet::empty())
    }

    #[inline]
    pub fn reset_all() -> Self {
        Self::empty()
    }

    /// Raw storage.
    #[inline]
    pub fn bits(self) -> S {
        self.bits.bits()
    }

    /// Wrap raw bits, keeping bits that match no variant.
    ///
    /// Kept bits show up in [`bits`](Self::bits) only: iteration and
    /// formatting skip them.
    #[inline]
    pub fn from_bits_retain(bits: S) -> Self {
        Self::wrap(BitSet::from_bits(bits))
    }

    /// Wrap raw bits, rejecting bits that match no variant.
    pub fn from_bits(bits: S) -> Result<Self, FlagError> {
        let unknown = BitSet::from_bits(bits).difference(Self::known());
        match unknown.ones().next() {
            None => Ok(Self::from_bits_retain(bits)),
            Some(index) => Err(FlagError::OutOfRange {
                index,
                bit_count: E::MAX_REPR as u32 + 1,
            }),
        }
    }

    #[inline]
    pub fn contains(self, flag: E) -> bool {
        self.bits.test(Self::index(flag))
    }

    /// Whether every flag of `other` is set.
    #[inline]
    pub fn all(self, other: impl Into<Self>) -> bool {
        self.bits.contains_all(other.into().bits)
    }

    /// Whether some flag of `other` is set.
    #[inline]
    pub fn any(self, other: impl Into<Self>) -> bool {
        self.bits.intersects(other.into().bits)
    }

    /// Whether no flag is set.
    #[inline]
    pub fn none(self) -> bool {
        self.bits.is_empty()
    }

    /// Whether no flag of `other` is set.
    #[inline]
    pub fn none_of(self, other: impl Into<Self>) -> bool {
        !self.any(other)
    }

    #[inline]
    pub fn set(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits | other.into().bits)
    }

    #[inline]
    pub fn reset(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits.difference(other.into().bits))
    }

    /// Same as [`reset`](Self::reset).
    #[inline]
    pub fn clear(self, other: impl Into<Self>) -> Self {
        self.reset(other)
    }

    #[inline]
    pub fn flip(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits ^ other.into().bits)
    }

    #[inline]
    pub fn mask(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits & other.into().bits)
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Call `f` for every set variant, lowest discriminant first.
    pub fn each_set<F: FnMut(E)>(self, f: F) {
        self.iter().for_each(f);
    }

    /// Set variants, lowest discriminant first. Retained unknown bits are skipped.
    pub fn iter(self) -> impl Iterator<Item = E> {
        self.bits
            .ones()
            .filter_map(|index| E::from_repr(i128::from(index)))
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(self) -> alloc::vec::Vec<E> {
        self.iter().collect()
    }
}

impl_flag_operators!(impl<E: Enumerant, S: BitStorage> BitFlags<E, S>);

impl<E: Enumerant, S: BitStorage> From<E> for BitFlags<E, S> {
    #[inline]
    fn from(flag: E) -> Self {
        Self::new(flag)
    }
}

impl<E: Enumerant, S: BitStorage, const N: usize> From<[E; N]> for BitFlags<E, S> {
    fn from(flags: [E; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl<E: Enumerant, S: BitStorage> FromIterator<E> for BitFlags<E, S> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |flags, flag| flags.set(flag))
    }
}

impl<E, S: Copy> Clone for BitFlags<E, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, S: Copy> Copy for BitFlags<E, S> {}

impl<E, S: PartialEq> PartialEq for BitFlags<E, S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E, S: Eq> Eq for BitFlags<E, S> {}

impl<E, S: Hash> Hash for BitFlags<E, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: Enumerant, S: BitStorage> Default for BitFlags<E, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: Enumerant + fmt::Display, S: BitStorage> fmt::Display for BitFlags<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.iter().next().is_none() {
            return f.write_str("<None>");
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(&flag, f)?;
        }
        Ok(())
    }
}

impl<E: Enumerant, S: BitStorage> fmt::Debug for BitFlags<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitFlags<{}>(", E::TYPE_NAME)?;
        if self.iter().next().is_none() {
            f.write_str("<None>")?;
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(flag.name())?;
        }
        f.write_str(")")
    }
}
