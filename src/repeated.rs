//! Repeated-enum flag sets: the options are an explicit list of variants.
//!
//! The bit index of an option is `discriminant - min(options)`, so a list of
//! sparse discriminants still packs into the narrowest integer that spans
//! them. Declare a set with [`repeated_flags!`](crate::repeated_flags):
//!
//! ```
//! use typeflags::{enum_flag_ops, repeated_flags, Enumerant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! pub enum Animal { Cat, Dog, Wolf = 3 }
//!
//! repeated_flags! { pub type Animals: Animal = [Animal::Cat, Animal::Dog, Animal::Wolf]; }
//! enum_flag_ops!(Animal => Animals);
//!
//! let pack = Animal::Cat | Animal::Dog;
//! assert!(pack.contains(Animal::Dog));
//! assert_eq!((pack & Animal::Cat) | Animal::Wolf, Animals::from_flags([Animal::Cat, Animal::Wolf]));
//! ```
//!
//! Listing an option twice does not compile:
//!
//! ```compile_fail
//! use typeflags::{repeated_flags, Enumerant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog }
//!
//! repeated_flags! { type Animals: Animal = [Animal::Cat, Animal::Dog, Animal::Cat]; }
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::checked::{bit_index, CheckedFlag, FlagOptions, OptionSet};
use crate::error::FlagError;
use crate::meta::value::{Enumerant, Value};
use crate::meta::value_list;
use crate::ops::impl_flag_operators;
use crate::primitives::bits::BitStorage;
use crate::primitives::bitset::BitSet;

/// Options of a [`RepeatedFlags`], all variants of one enum.
pub trait EnumOptions: FlagOptions {
    type Enum: Enumerant;
}

/// Smallest discriminant of a non-empty, single-type option list.
#[doc(hidden)]
pub const fn min_repr(values: &[Value]) -> i128 {
    match value_list::min_of(values) {
        Some(v) => v.repr(),
        None => panic!("all flag values should have the same type"),
    }
}

/// Bits spanned by a non-empty, single-type option list: `1 + max - min`.
#[doc(hidden)]
pub const fn bit_span(values: &[Value]) -> u32 {
    match (value_list::min_of(values), value_list::max_of(values)) {
        (Some(min), Some(max)) => (1 + max.repr() - min.repr()) as u32,
        _ => panic!("all flag values should have the same type"),
    }
}

/// Declare a [`RepeatedFlags`] alias and its options.
///
/// `repeated_flags! { pub type Animals: Animal = [Animal::Cat, Animal::Dog]; }`
/// defines `Animals = RepeatedFlags<AnimalsOptions>`.
///
/// The options struct names the enum in a public impl, so a `pub` flag set
/// needs a `pub` enum.
///
/// A set spanning more than 128 discriminants has no storage integer:
///
/// ```compile_fail
/// use typeflags::{repeated_flags, Enumerant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
/// enum Wide { Low, High = 128 }
///
/// repeated_flags! { type WideFlags: Wide = [Wide::Low, Wide::High]; }
///
/// let _ = WideFlags::set_all();
/// ```
#[macro_export]
macro_rules! repeated_flags {
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident: $enum:ty = [$($option:expr),+ $(,)?];
    ) => {
        $crate::paste::paste! {
            #[doc(hidden)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct [<$name Options>];

            impl [<$name Options>] {
                const __VALUES: &'static [$crate::Value] = &[$({
                    let option: $enum = $option;
                    option.__flag_value()
                }),+];
                const __BIT_COUNT: u32 = $crate::repeated::bit_span(Self::__VALUES);
            }

            const _: () = assert!(
                $crate::meta::value_list::is_set([<$name Options>]::__VALUES),
                "Flag bit values have to be unique"
            );

            impl $crate::checked::FlagOptions for [<$name Options>] {
                type Storage = <$crate::primitives::Width<
                    { $crate::primitives::bytes_for_bits([<$name Options>]::__BIT_COUNT as usize) }
                > as $crate::primitives::StorageWidth>::Out;
                const VALUES: &'static [$crate::Value] = Self::__VALUES;
                const INDEXING: $crate::checked::Indexing = $crate::checked::Indexing::Offset {
                    min: $crate::repeated::min_repr(Self::__VALUES),
                };
                const BIT_COUNT: u32 = Self::__BIT_COUNT;
            }

            impl $crate::repeated::EnumOptions for [<$name Options>] {
                type Enum = $enum;
            }

            $(#[$meta])*
            $vis type $name = $crate::RepeatedFlags<[<$name Options>]>;
        }
    };
}

/// Set of options `O`.
pub struct RepeatedFlags<O: EnumOptions> {
    bits: BitSet<O::Storage>,
    _options: PhantomData<fn() -> O>,
}

impl<O: EnumOptions> RepeatedFlags<O> {
    #[inline]
    fn wrap(bits: BitSet<O::Storage>) -> Self {
        Self { bits, _options: PhantomData }
    }

    fn option_bits() -> BitSet<O::Storage> {
        BitSet::from_bits(<O::Storage as BitStorage>::from_u128_truncate(O::OPTION_MASK))
    }

    /// Bit index of `flag`, `None` when it is not an option.
    #[inline]
    pub fn index_of(flag: O::Enum) -> Option<u32> {
        bit_index(O::VALUES, O::INDEXING, flag.value())
    }

    /// Set holding only `flag`.
    ///
    /// # Panics
    ///
    /// Panics if `flag` is not an option. Use [`try_from_flag`](Self::try_from_flag)
    /// or [`flag!`](crate::flag) to avoid the panic.
    pub fn new(flag: O::Enum) -> Self {
        match Self::try_from_flag(flag) {
            Ok(flags) => flags,
            Err(err) => panic!("{err}"),
        }
    }

    /// Set holding only `flag`, or why it cannot.
    pub fn try_from_flag(flag: O::Enum) -> Result<Self, FlagError> {
        Self::index_of(flag)
            .map(|index| Self::wrap(BitSet::from_index(index)))
            .ok_or(FlagError::NotAnOption {
                type_name: <O::Enum as Enumerant>::TYPE_NAME,
                value: flag.name(),
            })
    }

    /// Set holding every flag in `flags`.
    ///
    /// # Panics
    ///
    /// Panics if one of `flags` is not an option.
    pub fn from_flags(flags: impl IntoIterator<Item = O::Enum>) -> Self {
        flags
            .into_iter()
            .fold(Self::reset_all(), |acc, flag| acc.set(Self::new(flag)))
    }

    /// Raw storage.
    #[inline]
    pub fn bits(self) -> O::Storage {
        self.bits.bits()
    }

    /// Wrap raw bits, rejecting bits that belong to no option.
    pub fn from_bits(bits: O::Storage) -> Result<Self, FlagError> {
        let unknown = BitSet::from_bits(bits).difference(Self::option_bits());
        match unknown.ones().next() {
            None => Ok(Self::wrap(BitSet::from_bits(bits))),
            Some(index) => Err(FlagError::OutOfRange { index, bit_count: O::BIT_COUNT }),
        }
    }

    /// Whether `flag` is set. Always false for a non-option.
    #[inline]
    pub fn contains(self, flag: O::Enum) -> bool {
        Self::index_of(flag).is_some_and(|index| self.bits.test(index))
    }

    /// Whether every option is set.
    #[inline]
    pub fn all(self) -> bool {
        self.all_of(Self::set_all())
    }

    /// Whether every flag of `other` is set.
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

    /// Every option set.
    #[inline]
    pub fn set_all() -> Self {
        Self::wrap(Self::option_bits())
    }

    /// No option set.
    #[inline]
    pub fn reset_all() -> Self {
        Self::wrap(BitSet::empty())
    }

    /// Every option toggled.
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

    /// Call `f(option, is_set)` for every option, in declaration order.
    pub fn each<F: FnMut(O::Enum, bool)>(self, mut f: F) {
        for flag in Self::options() {
            f(flag, self.contains(flag));
        }
    }

    pub fn each_set<F: FnMut(O::Enum)>(self, mut f: F) {
        self.each(|flag, set| {
            if set {
                f(flag)
            }
        });
    }

    pub fn each_reset<F: FnMut(O::Enum)>(self, mut f: F) {
        self.each(|flag, set| {
            if !set {
                f(flag)
            }
        });
    }

    /// Every option, in declaration order.
    pub fn options() -> impl Iterator<Item = O::Enum> {
        O::VALUES
            .iter()
            .filter_map(|value| <O::Enum as Enumerant>::from_repr(value.repr()))
    }

    /// Set options in declaration order.
    pub fn iter(self) -> impl Iterator<Item = O::Enum> {
        Self::options().filter(move |flag| self.contains(*flag))
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(self) -> alloc::vec::Vec<O::Enum> {
        self.iter().collect()
    }
}

impl_flag_operators!(impl<O: EnumOptions> RepeatedFlags<O>);

impl<O: EnumOptions> core::ops::Not for RepeatedFlags<O> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.flip_all()
    }
}

/// # Panics
///
/// Panics if the flag is not an option.
impl<E: Enumerant, O: EnumOptions<Enum = E>> From<E> for RepeatedFlags<O> {
    #[inline]
    fn from(flag: E) -> Self {
        Self::new(flag)
    }
}

impl<O: EnumOptions> From<CheckedFlag<RepeatedFlags<O>>> for RepeatedFlags<O> {
    #[inline]
    fn from(flag: CheckedFlag<RepeatedFlags<O>>) -> Self {
        Self::wrap(BitSet::from_index(flag.index()))
    }
}

impl<E: Enumerant, O: EnumOptions<Enum = E>> FromIterator<E> for RepeatedFlags<O> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_flags(iter)
    }
}

impl<O: EnumOptions> OptionSet for RepeatedFlags<O> {
    type Options = O;
}

impl<O: EnumOptions> Clone for RepeatedFlags<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: EnumOptions> Copy for RepeatedFlags<O> {}

impl<O: EnumOptions> PartialEq for RepeatedFlags<O> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<O: EnumOptions> Eq for RepeatedFlags<O> {}

impl<O: EnumOptions> Hash for RepeatedFlags<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<O: EnumOptions> Default for RepeatedFlags<O> {
    fn default() -> Self {
        Self::reset_all()
    }
}

impl<O: EnumOptions> fmt::Display for RepeatedFlags<O>
where
    O::Enum: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
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

impl<O: EnumOptions> fmt::Debug for RepeatedFlags<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RepeatedFlags<{}>(", <O::Enum as Enumerant>::TYPE_NAME)?;
        if self.bits.is_empty() {
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
