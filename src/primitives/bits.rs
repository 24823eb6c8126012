//! Bit storage: the unsigned integer behind every flag set.
//!
//! [`BitStorage`] wraps the handful of intrinsics a flag set needs
//! (`count_ones`, `trailing_zeros`, `leading_zeros`) behind one trait so the
//! flag sets stay generic over the width. [`Width`] and [`PeanoStorage`] pick
//! the narrowest integer for a given number of bits.

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use super::stream::Peano;

/// Fixed-width unsigned integer holding flag bits.
pub trait BitStorage:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Binary
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// Number of bits available.
    const BITS: u32;
    /// No bit set.
    const ZERO: Self;
    /// Every bit set.
    const ALL: Self;

    /// Value with only bit `index` set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::BITS`.
    fn bit(index: u32) -> Self;

    /// Value with the lowest `count` bits set. `count` is clamped to `BITS`.
    fn low_mask(count: u32) -> Self;

    /// Whether bit `index` is set. Indices past `BITS` read as unset.
    fn test(self, index: u32) -> bool;

    /// Number of bits set.
    fn count_ones(self) -> u32;

    /// Number of zero bits below the lowest set bit (`BITS` for zero).
    fn trailing_zeros(self) -> u32;

    /// Number of zero bits above the highest set bit (`BITS` for zero).
    fn leading_zeros(self) -> u32;

    /// Index of the lowest set bit, `0` for the zero value.
    #[inline]
    fn lowest_set_index(self) -> u32 {
        if self == Self::ZERO { 0 } else { self.trailing_zeros() }
    }

    /// Widen to `u128`.
    fn to_u128(self) -> u128;

    /// Narrow from `u128`, dropping bits that do not fit.
    fn from_u128_truncate(bits: u128) -> Self;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),*) => {
        $(
            impl BitStorage for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ALL: Self = <$ty>::MAX;

                #[inline]
                fn bit(index: u32) -> Self {
                    assert!(index < <$ty>::BITS, "bit index exceeds storage width");
                    1 << index
                }

                #[inline]
                fn low_mask(count: u32) -> Self {
                    if count >= <$ty>::BITS {
                        <$ty>::MAX
                    } else {
                        (1 << count) - 1
                    }
                }

                #[inline]
                fn test(self, index: u32) -> bool {
                    index < <$ty>::BITS && (self >> index) & 1 == 1
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128_truncate(bits: u128) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_bit_storage!(u8, u16, u32, u64, u128);

// =============================================================================
// Storage selection
// =============================================================================

/// Bytes needed to hold `bits` bits.
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Byte width marker used to select a storage integer.
pub struct Width<const BYTES: usize>;

/// Maps a byte width to the narrowest integer that holds it.
#[diagnostic::on_unimplemented(
    message = "not enough bits in the widest storage for `{Self}`",
    label = "a flag set holds at most 128 flags",
    note = "remove options (or gaps) until the flag set needs 128 bits or fewer"
)]
pub trait StorageWidth {
    type Out: BitStorage;
}

macro_rules! impl_storage_width {
    ($($bytes:literal => $ty:ty),* $(,)?) => {
        $(
            impl StorageWidth for Width<$bytes> {
                type Out = $ty;
            }
        )*
    };
}

impl_storage_width!(
    0 => u8, 1 => u8, 2 => u16, 3 => u32, 4 => u32,
    5 => u64, 6 => u64, 7 => u64, 8 => u64,
    9 => u128, 10 => u128, 11 => u128, 12 => u128,
    13 => u128, 14 => u128, 15 => u128, 16 => u128,
);

/// Storage for a type-level bit count (`D0..D128`).
#[diagnostic::on_unimplemented(
    message = "not enough bits in the widest storage for a list of length `{Self}`",
    label = "a flag set holds at most 128 flags"
)]
pub trait PeanoStorage: Peano {
    type Out: BitStorage;
}

macros::storage_table!(128);

const _: () = {
    assert!(bytes_for_bits(0) == 0);
    assert!(bytes_for_bits(1) == 1);
    assert!(bytes_for_bits(8) == 1);
    assert!(bytes_for_bits(9) == 2);
    assert!(bytes_for_bits(128) == 16);
    assert!(<<Width<4> as StorageWidth>::Out as BitStorage>::BITS == 32);
    assert!(<<Width<3> as StorageWidth>::Out as BitStorage>::BITS == 32);
    assert!(<<Width<9> as StorageWidth>::Out as BitStorage>::BITS == 128);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsics_match_the_integer_methods() {
        assert_eq!(<u32 as BitStorage>::count_ones(0b1011), 3);
        assert_eq!(<u32 as BitStorage>::trailing_zeros(0b1000), 3);
        assert_eq!(<u32 as BitStorage>::leading_zeros(1), 31);
        assert_eq!(0u32.lowest_set_index(), 0);
        assert_eq!((1u32 << 24).lowest_set_index(), 24);
    }

    #[test]
    fn low_mask_clamps_to_width() {
        assert_eq!(<u8 as BitStorage>::low_mask(0), 0);
        assert_eq!(<u8 as BitStorage>::low_mask(3), 0b111);
        assert_eq!(<u8 as BitStorage>::low_mask(8), 0xFF);
        assert_eq!(<u8 as BitStorage>::low_mask(200), 0xFF);
    }

    #[test]
    fn test_ignores_out_of_range_indices() {
        assert!(<u16 as BitStorage>::test(0x8000, 15));
        assert!(!<u16 as BitStorage>::test(0xFFFF, 16));
    }

    #[test]
    #[should_panic(expected = "bit index exceeds storage width")]
    fn bit_rejects_out_of_range_index() {
        let _ = <u8 as BitStorage>::bit(8);
    }
}
