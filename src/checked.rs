//! Flags validated while compiling.
//!
//! The value-based designs ([`RepeatedFlags`](crate::RepeatedFlags),
//! [`ValueFlags`](crate::ValueFlags)) accept any enum value at runtime and
//! panic on one that is not an option. [`flag!`](crate::flag) moves that check
//! into a `const` item, so a wrong flag becomes a compile error instead.

use core::fmt;
use core::marker::PhantomData;

use crate::meta::value::Value;
use crate::meta::value_list::{self, NOT_FOUND};
use crate::primitives::bits::BitStorage;

/// How a flag set turns an option into a bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// `repr - min`: bit positions follow the discriminants.
    Offset { min: i128 },
    /// Position in the option list; null entries are gaps.
    Position,
}

/// Option list of a value-based flag set. Generated by the declaring macros.
pub trait FlagOptions: 'static {
    /// Integer holding the bits.
    type Storage: BitStorage;

    /// The options in declaration order, gaps included.
    const VALUES: &'static [Value];

    const INDEXING: Indexing;

    /// Number of bits the set spans, unused ones included.
    const BIT_COUNT: u32;

    /// Bits that belong to an option.
    const OPTION_MASK: u128 = option_mask(Self::VALUES, Self::INDEXING);
}

/// Bit index of `value`, `None` when it is not an option.
pub const fn bit_index(values: &[Value], indexing: Indexing, value: Value) -> Option<u32> {
    if value.is_null() {
        return None;
    }
    let index = value_list::index_of(values, value);
    if index == NOT_FOUND {
        return None;
    }
    match indexing {
        Indexing::Offset { min } => Some((value.repr() - min) as u32),
        Indexing::Position => Some(index as u32),
    }
}

/// Every option bit set.
pub const fn option_mask(values: &[Value], indexing: Indexing) -> u128 {
    let mut mask = 0u128;
    let mut i = 0;
    while i < values.len() {
        if let Some(index) = bit_index(values, indexing, values[i]) {
            mask |= 1 << index;
        }
        i += 1;
    }
    mask
}

/// A flag set whose options are values.
pub trait OptionSet: Copy + 'static {
    type Options: FlagOptions;
}

/// Bit index of a flag, validated against flag set `F`.
pub struct CheckedFlag<F> {
    index: u32,
    _set: PhantomData<fn() -> F>,
}

impl<F: OptionSet> CheckedFlag<F> {
    /// Validate `value`. Meant for `const` items; see [`flag!`](crate::flag).
    ///
    /// # Panics
    ///
    /// Panics (fails to compile in const context) when `value` is not an
    /// option of `F`.
    pub const fn new(value: Value) -> Self {
        match bit_index(<F::Options as FlagOptions>::VALUES, <F::Options as FlagOptions>::INDEXING, value) {
            Some(index) => Self { index, _set: PhantomData },
            None => panic!("flag is not an option of this flag set"),
        }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl<F> Clone for CheckedFlag<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for CheckedFlag<F> {}

impl<F> PartialEq for CheckedFlag<F> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<F> Eq for CheckedFlag<F> {}

impl<F> fmt::Debug for CheckedFlag<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CheckedFlag").field(&self.index).finish()
    }
}

/// A flag of `$flags`, checked while compiling.
///
/// ```
/// use typeflags::{flag, repeated_flags, Enumerant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
/// enum Animal { Cat, Dog, Wolf = 3 }
///
/// repeated_flags! { type Animals: Animal = [Animal::Cat, Animal::Dog]; }
///
/// let dog = Animals::from(flag!(Animals, Animal::Dog));
/// assert!(dog.contains(Animal::Dog));
/// ```
///
/// ```compile_fail
/// use typeflags::{flag, repeated_flags, Enumerant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
/// enum Animal { Cat, Dog, Wolf = 3 }
///
/// repeated_flags! { type Animals: Animal = [Animal::Cat, Animal::Dog]; }
///
/// let wolf = flag!(Animals, Animal::Wolf);
/// ```
#[macro_export]
macro_rules! flag {
    ($flags:ty, $value:expr) => {{
        const FLAG: $crate::CheckedFlag<$flags> = $crate::CheckedFlag::new(($value).__flag_value());
        FLAG
    }};
}

/// A flag set holding the listed flags, each checked while compiling.
#[macro_export]
macro_rules! flag_list {
    ($flags:ty; $($value:expr),* $(,)?) => {{
        let flags = <$flags as ::core::default::Default>::default();
        $( let flags = flags | $crate::flag!($flags, $value); )*
        flags
    }};
}
