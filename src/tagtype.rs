//! Tag-type flag sets: the options are types, the bit index is the position
//! in the type list.
//!
//! ```
//! use typeflags::{type_list, Flag, Tag, TagFlags, Void};
//!
//! #[derive(Tag)]
//! struct Cat;
//! #[derive(Tag)]
//! struct Dog;
//! #[derive(Tag)]
//! struct Wolf;
//!
//! type Animals = TagFlags<type_list![Cat, Dog, Void, Wolf]>;
//!
//! let pack = Animals::from(Flag::<Cat>::new()) | Flag::<Dog>::new();
//! assert_eq!(pack.to_string(), "Cat | Dog");
//! assert_eq!(((pack & Flag::<Cat>::new()) | Flag::<Wolf>::new()).bits(), 0b1001);
//! ```
//!
//! A gap is never a flag:
//!
//! ```compile_fail
//! use typeflags::{type_list, Flag, TagFlags, Void};
//!
//! type Numbers = TagFlags<type_list![i32, Void, u8]>;
//! let _ = Numbers::new(Flag::<Void>::new());
//! ```
//!
//! Neither is a type outside the list:
//!
//! ```compile_fail
//! use typeflags::{type_list, Flag, TagFlags};
//!
//! type Numbers = TagFlags<type_list![i32, u8]>;
//! let _ = Numbers::new(Flag::<char>::new());
//! ```
//!
//! And an option may only be listed once, even behind an alias:
//!
//! ```compile_fail
//! use typeflags::{type_list, Flag, TagFlags};
//!
//! type Int = i32;
//! type Numbers = TagFlags<type_list![i32, Int]>;
//! let _ = Numbers::new(Flag::<i32>::new());
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::error::FlagError;
use crate::meta::tag::{Tag, Void};
use crate::meta::type_list::{position, Filter, IndexOf, MaskIn, TagVisitor, TypeList};
use crate::ops::impl_flag_operators;
use crate::primitives::bits::{BitStorage, PeanoStorage};
use crate::primitives::bitset::BitSet;

/// Names tag `T` as a flag.
pub struct Flag<T>(PhantomData<fn() -> T>);

impl<T> Flag<T> {
    #[inline]
    pub const fn new() -> Self {
        Flag(PhantomData)
    }
}

impl<T> Clone for Flag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Flag<T> {}

impl<T> Default for Flag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tag> fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flag<{}>", T::NAME)
    }
}

impl<T: Tag> fmt::Display for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::NAME)
    }
}

/// Names every tag of list `L` as flags.
pub struct FlagList<L>(PhantomData<fn() -> L>);

impl<L> FlagList<L> {
    #[inline]
    pub const fn new() -> Self {
        FlagList(PhantomData)
    }
}

impl<L> Clone for FlagList<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for FlagList<L> {}

impl<L> Default for FlagList<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// A type list usable as the options of a [`TagFlags`].
///
/// Implemented for every list of at most 128 tags.
pub trait TagOptions: TypeList + Sized {
    /// Integer wide enough for every entry, gaps included.
    type Storage: BitStorage;

    /// The list without its gaps.
    type Options: TypeList + MaskIn<Self>;
}

impl<L> TagOptions for L
where
    L: TypeList + Filter<Void>,
    L::Len: PeanoStorage,
    <L as Filter<Void>>::Out: TypeList + MaskIn<L>,
{
    type Storage = <L::Len as PeanoStorage>::Out;
    type Options = <L as Filter<Void>>::Out;
}

/// Receives every option of a [`TagFlags`] with its state.
pub trait FlagVisitor {
    fn visit<T: Tag>(&mut self, flag: Flag<T>, is_set: bool);
}

/// Set of the tags in `L`.
pub struct TagFlags<L: TagOptions> {
    bits: BitSet<L::Storage>,
    _list: PhantomData<fn() -> L>,
}

impl<L: TagOptions> TagFlags<L> {
    const CHECK: () = assert!(<L::Options as TypeList>::IS_SET, "do not repeat types");

    #[inline]
    fn wrap(bits: BitSet<L::Storage>) -> Self {
        let () = Self::CHECK;
        Self { bits, _list: PhantomData }
    }

    fn option_bits() -> BitSet<L::Storage> {
        <L::Options as MaskIn<L>>::mask_in::<L::Storage>()
    }

    /// Bit index of tag `T`. Fails to compile when `T` is not an option.
    #[inline]
    pub fn index_of<T: Tag>() -> u32
    where
        L: IndexOf<T>,
    {
        position::<L, T>()
    }

    /// Set holding only `flag`.
    #[inline]
    pub fn new<T: Tag>(_flag: Flag<T>) -> Self
    where
        L: IndexOf<T>,
    {
        Self::wrap(BitSet::from_index(Self::index_of::<T>()))
    }

    /// Set holding every tag of `L2`.
    #[inline]
    pub fn from_list<L2: MaskIn<L>>() -> Self {
        Self::wrap(L2::mask_in::<L::Storage>())
    }

    /// Raw storage.
    #[inline]
    pub fn bits(self) -> L::Storage {
        self.bits.bits()
    }

    /// Wrap raw bits, rejecting bits of gaps and bits past the list.
    pub fn from_bits(bits: L::Storage) -> Result<Self, FlagError> {
        let unknown = BitSet::from_bits(bits).difference(Self::option_bits());
        match unknown.ones().next() {
            None => Ok(Self::wrap(BitSet::from_bits(bits))),
            Some(index) => Err(FlagError::OutOfRange { index, bit_count: L::LEN as u32 }),
        }
    }

    #[inline]
    pub fn contains<T: Tag>(self, _flag: Flag<T>) -> bool
    where
        L: IndexOf<T>,
    {
        self.bits.test(Self::index_of::<T>())
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

    #[inline]
    pub fn all_list<L2: MaskIn<L>>(self) -> bool {
        self.all_of(Self::from_list::<L2>())
    }

    #[inline]
    pub fn any_list<L2: MaskIn<L>>(self) -> bool {
        self.any_of(Self::from_list::<L2>())
    }

    #[inline]
    pub fn none_list<L2: MaskIn<L>>(self) -> bool {
        self.none_of(Self::from_list::<L2>())
    }

    #[inline]
    pub fn set_list<L2: MaskIn<L>>(self) -> Self {
        self.set(Self::from_list::<L2>())
    }

    #[inline]
    pub fn reset_list<L2: MaskIn<L>>(self) -> Self {
        self.reset(Self::from_list::<L2>())
    }

    #[inline]
    pub fn flip_list<L2: MaskIn<L>>(self) -> Self {
        self.flip(Self::from_list::<L2>())
    }

    #[inline]
    pub fn mask_list<L2: MaskIn<L>>(self) -> Self {
        self.mask(Self::from_list::<L2>())
    }

    /// Visit every option in list order, gaps skipped.
    pub fn each<V: FlagVisitor>(self, visitor: &mut V) {
        struct Options<'a, V, S> {
            bits: BitSet<S>,
            visitor: &'a mut V,
        }

        impl<V: FlagVisitor, S: BitStorage> TagVisitor for Options<'_, V, S> {
            fn visit<T: Tag>(&mut self, index: usize) {
                if !T::IS_VOID {
                    self.visitor.visit(Flag::<T>::new(), self.bits.test(index as u32));
                }
            }
        }

        L::each(&mut Options { bits: self.bits, visitor });
    }

    /// Call `f` with the name of every set option, in list order.
    pub fn each_set<F: FnMut(&'static str)>(self, f: F) {
        self.each(&mut Names { f, wanted: true });
    }

    /// Call `f` with the name of every clear option, in list order.
    pub fn each_reset<F: FnMut(&'static str)>(self, f: F) {
        self.each(&mut Names { f, wanted: false });
    }

    #[cfg(feature = "alloc")]
    pub fn names(self) -> alloc::vec::Vec<&'static str> {
        let mut names = alloc::vec::Vec::new();
        self.each_set(|name| names.push(name));
        names
    }
}

struct Names<F> {
    f: F,
    wanted: bool,
}

impl<F: FnMut(&'static str)> FlagVisitor for Names<F> {
    fn visit<T: Tag>(&mut self, _flag: Flag<T>, is_set: bool) {
        if is_set == self.wanted {
            (self.f)(T::NAME)
        }
    }
}

impl_flag_operators!(impl<L: TagOptions> TagFlags<L>);

impl<L: TagOptions> core::ops::Not for TagFlags<L> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.flip_all()
    }
}

impl<L, T> From<Flag<T>> for TagFlags<L>
where
    L: TagOptions + IndexOf<T>,
    T: Tag,
{
    #[inline]
    fn from(flag: Flag<T>) -> Self {
        Self::new(flag)
    }
}

impl<L, L2> From<FlagList<L2>> for TagFlags<L>
where
    L: TagOptions,
    L2: MaskIn<L>,
{
    #[inline]
    fn from(_list: FlagList<L2>) -> Self {
        Self::from_list::<L2>()
    }
}

impl<L: TagOptions> Clone for TagFlags<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: TagOptions> Copy for TagFlags<L> {}

impl<L: TagOptions> PartialEq for TagFlags<L> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<L: TagOptions> Eq for TagFlags<L> {}

impl<L: TagOptions> Hash for TagFlags<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<L: TagOptions> Default for TagFlags<L> {
    fn default() -> Self {
        Self::reset_all()
    }
}

impl<L: TagOptions> fmt::Display for TagFlags<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
            return f.write_str("<None>");
        }
        let mut result = Ok(());
        let mut first = true;
        self.each_set(|name| {
            if result.is_err() {
                return;
            }
            if !first {
                result = f.write_str(" | ");
            }
            first = false;
            if result.is_ok() {
                result = f.write_str(name);
            }
        });
        result
    }
}

impl<L: TagOptions> fmt::Debug for TagFlags<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagFlags({self})")
    }
}
