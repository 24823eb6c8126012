//! Tag-value flag sets: the options are enum values, possibly of different
//! enums, and the bit index is the position in the option list.
//!
//! ```
//! use typeflags::{value_flags, Enumerant, ValueFlags};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum AnimalWolf { Wolf }
//!
//! value_flags! { type Animals = [Animal::Cat, Animal::Dog, _, AnimalWolf::Wolf]; }
//!
//! let pack = Animals::from(Animal::Cat) | Animal::Dog;
//! assert_eq!(pack.to_string(), "Cat | Dog");
//! assert_eq!(((pack & Animal::Cat) | AnimalWolf::Wolf).bits(), 0b1001);
//! ```
//!
//! ```compile_fail
//! use typeflags::{value_flags, Enumerant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog }
//!
//! value_flags! { type Animals = [Animal::Cat, _, Animal::Cat]; }
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::checked::{bit_index, CheckedFlag, FlagOptions, OptionSet};
use crate::error::FlagError;
use crate::meta::value::{Enumerant, Value};
use crate::ops::impl_flag_operators;
use crate::primitives::bits::BitStorage;
use crate::primitives::bitset::BitSet;

/// Options of a [`ValueFlags`]: values indexed by position, null entries are gaps.
pub trait ValueOptions: FlagOptions {}

/// Declare a [`ValueFlags`] alias and its options. `_` marks a gap.
///
/// `value_flags! { pub type Animals = [Animal::Cat, _, Plant::Fern]; }`
/// defines `Animals = ValueFlags<AnimalsOptions>`.
#[macro_export]
macro_rules! value_flags {
    (@values [$($acc:tt)*]) => {
        &[$($acc)*]
    };
    (@values [$($acc:tt)*] _ $(, $($rest:tt)*)?) => {
        $crate::value_flags!(@values [$($acc)* $crate::Value::NULL,] $($($rest)*)?)
    };
    (@values [$($acc:tt)*] $option:expr $(, $($rest:tt)*)?) => {
        $crate::value_flags!(@values [$($acc)* ($option).__flag_value(),] $($($rest)*)?)
    };
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = [$($options:tt)+];
    ) => {
        $crate::paste::paste! {
            #[doc(hidden)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct [<$name Options>];

            impl [<$name Options>] {
                const __VALUES: &'static [$crate::Value] = $crate::value_flags!(@values [] $($options)+);
            }

            const _: () = assert!(
                $crate::meta::value_list::is_set_ignoring_null([<$name Options>]::__VALUES),
                "do not repeat values"
            );

            impl $crate::checked::FlagOptions for [<$name Options>] {
                type Storage = <$crate::primitives::Width<
                    { $crate::primitives::bytes_for_bits([<$name Options>]::__VALUES.len()) }
                > as $crate::primitives::StorageWidth>::Out;
                const VALUES: &'static [$crate::Value] = Self::__VALUES;
                const INDEXING: $crate::checked::Indexing = $crate::checked::Indexing::Position;
                const BIT_COUNT: u32 = Self::__VALUES.len() as u32;
            }

            impl $crate::tagvalue::ValueOptions for [<$name Options>] {}

            $(#[$meta])*
            $vis type $name = $crate::ValueFlags<[<$name Options>]>;
        }
    };
}

/// Set of the values in `O`.
pub struct ValueFlags<O: ValueOptions> {
    bits: BitSet<O::Storage>,
    _options: PhantomData<fn() -> O>,
}

impl<O: ValueOptions> ValueFlags<O> {
    #[inline]
    fn wrap(bits: BitSet<O::Storage>) -> Self {
        Self { bits, _options: PhantomData }
    }

    fn option_bits() -> BitSet<O::Storage> {
        BitSet::from_bits(<O::Storage as BitStorage>::from_u128_truncate(O::OPTION_MASK))
    }

    /// Bit index of `value`, `None` for a gap or a non-option.
    #[inline]
    pub fn value_index(value: Value) -> Option<u32> {
        bit_index(O::VALUES, O::INDEXING, value)
    }

    /// Bit index of `flag`, `None` when it is not an option.
    #[inline]
    pub fn index_of<V: Enumerant>(flag: V) -> Option<u32> {
        Self::value_index(flag.value())
    }

    /// Set holding only `flag`.
    ///
    /// # Panics
    ///
    /// Panics if `flag` is not an option. Use [`try_from_flag`](Self::try_from_flag)
    /// or [`flag!`](crate::flag) to avoid the panic.
    pub fn new<V: Enumerant>(flag: V) -> Self {
        match Self::try_from_flag(flag) {
            Ok(flags) => flags,
            Err(err) => panic!("{err}"),
        }
    }

    /// Set holding only `flag`, or why it cannot.
    pub fn try_from_flag<V: Enumerant>(flag: V) -> Result<Self, FlagError> {
        Self::index_of(flag)
            .map(|index| Self::wrap(BitSet::from_index(index)))
            .ok_or(FlagError::NotAnOption {
                type_name: V::TYPE_NAME,
                value: flag.name(),
            })
    }

    /// Raw storage.
    #[inline]
    pub fn bits(self) -> O::Storage {
        self.bits.bits()
    }

    /// Wrap raw bits, rejecting bits of gaps and bits past the list.
    pub fn from_bits(bits: O::Storage) -> Result<Self, FlagError> {
        let unknown = BitSet::from_bits(bits).difference(Self::option_bits());
        match unknown.ones().next() {
            None => Ok(Self::wrap(BitSet::from_bits(bits))),
            Some(index) => Err(FlagError::OutOfRange { index, bit_count: O::BIT_COUNT }),
        }
    }

    /// Whether `flag` is set. Always false for a non-option.
    #[inline]
    pub fn contains<V: Enumerant>(self, flag: V) -> bool {
        self.contains_value(flag.value())
    }

    #[inline]
    pub fn contains_value(self, value: Value) -> bool {
        Self::value_index(value).is_some_and(|index| self.bits.test(index))
    }

    /// Whether every option is set.
    #[inline]
    pub fn all(self) -> bool {
        self.all_of(Self::set_all())
    }

    #[inline]
    pub fn all_of(self, other: impl Into<Self>) -> bool {
        self.bits.contains_all(other.into().bits)
    }

    /// Whether some option is set.
    #[inline]
    pub fn any(self) -> bool {
        self.any_of(Self::set_all())
    }

    #[inline]
    pub fn any_of(self, other: impl Into<Self>) -> bool {
        self.bits.intersects(other.into().bits)
    }

    /// Whether no option is set.
    #[inline]
    pub fn none(self) -> bool {
        self.none_of(Self::set_all())
    }

    #[inline]
    pub fn none_of(self, other: impl Into<Self>) -> bool {
        !self.bits.intersects(other.into().bits)
    }

    /// Every option set. Gap bits stay clear.
    #[inline]
    pub fn set_all() -> Self {
        Self::wrap(Self::option_bits())
    }

    #[inline]
    pub fn reset_all() -> Self {
        Self::wrap(BitSet::empty())
    }

    /// Every option toggled. Gap bits stay clear.
    #[inline]
    pub fn flip_all(self) -> Self {
        Self::wrap(self.bits ^ Self::option_bits())
    }

    #[inline]
    pub fn set(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits | other.into().bits)
    }

    #[inline]
    pub fn reset(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits.difference(other.into().bits))
    }

    #[inline]
    pub fn flip(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits ^ other.into().bits)
    }

    #[inline]
    pub fn mask(self, other: impl Into<Self>) -> Self {
        Self::wrap(self.bits & other.into().bits)
    }

    /// Every option, in list order, gaps skipped.
    pub fn options() -> impl Iterator<Item = Value> {
        O::VALUES.iter().copied().filter(|value| !value.is_null())
    }

    /// Call `f(option, is_set)` for every option, in list order.
    pub fn each<F: FnMut(Value, bool)>(self, mut f: F) {
        for value in Self::options() {
            f(value, self.contains_value(value));
        }
    }

    pub fn each_set<F: FnMut(Value)>(self, mut f: F) {
        self.each(|value, set| {
            if set {
                f(value)
            }
        });
    }

    pub fn each_reset<F: FnMut(Value)>(self, mut f: F) {
        self.each(|value, set| {
            if !set {
                f(value)
            }
        });
    }

    /// Set options in list order.
    pub fn iter(self) -> impl Iterator<Item = Value> {
        Self::options().filter(move |value| self.contains_value(*value))
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(self) -> alloc::vec::Vec<Value> {
        self.iter().collect()
    }
}

impl_flag_operators!(impl<O: ValueOptions> ValueFlags<O>);

impl<O: ValueOptions> core::ops::Not for ValueFlags<O> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.flip_all()
    }
}

/// # Panics
///
/// Panics if the flag is not an option.
impl<V: Enumerant, O: ValueOptions> From<V> for ValueFlags<O> {
    #[inline]
    fn from(flag: V) -> Self {
        Self::new(flag)
    }
}

impl<O: ValueOptions> From<CheckedFlag<ValueFlags<O>>> for ValueFlags<O> {
    #[inline]
    fn from(flag: CheckedFlag<ValueFlags<O>>) -> Self {
        Self::wrap(BitSet::from_index(flag.index()))
    }
}

impl<O: ValueOptions> OptionSet for ValueFlags<O> {
    type Options = O;
}

impl<O: ValueOptions> Clone for ValueFlags<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ValueOptions> Copy for ValueFlags<O> {}

impl<O: ValueOptions> PartialEq for ValueFlags<O> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<O: ValueOptions> Eq for ValueFlags<O> {}

impl<O: ValueOptions> Hash for ValueFlags<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<O: ValueOptions> Default for ValueFlags<O> {
    fn default() -> Self {
        Self::reset_all()
    }
}

impl<O: ValueOptions> fmt::Display for ValueFlags<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
            return f.write_str("<None>");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(&value, f)?;
        }
        Ok(())
    }
}

impl<O: ValueOptions> fmt::Debug for ValueFlags<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueFlags({self})")
    }
}
