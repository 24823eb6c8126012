//! Type lists: `TCons<A, TCons<B, TNil>>`.
//!
//! Lookups ([`IndexOf`], [`TypeList::IS_SET`]) are associated constants, so
//! they can feed `const` assertions. Transformations ([`Filter`], [`Concat`])
//! are associated types. Build lists with `type_list![A, B, C]`.
//!
//! ```
//! use typeflags::{type_list, TypeList, Void};
//!
//! type Numbers = type_list![i32, Void, char, Void];
//! assert_eq!(<Numbers as TypeList>::LEN, 4);
//! ```
//!
//! A type listed twice is rejected where the list is written:
//!
//! ```compile_fail
//! use typeflags::type_list;
//!
//! type Numbers = type_list![i32, char, i32];
//! ```

use core::marker::PhantomData;

use crate::primitives::bits::BitStorage;
use crate::primitives::bitset::BitSet;
use crate::primitives::stream::{Peano, S, Z};
use crate::primitives::Bool;

use super::tag::{Tag, TagEq};

/// Index reported for a tag that is not in the list.
pub const NOT_FOUND: usize = usize::MAX;

/// Empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TNil;

/// List with head `H` and tail `T`.
pub struct TCons<H, T>(PhantomData<fn() -> (H, T)>);

impl<H, T> Default for TCons<H, T> {
    fn default() -> Self {
        TCons(PhantomData)
    }
}

/// Receives each tag of a list in order.
pub trait TagVisitor {
    fn visit<T: Tag>(&mut self, index: usize);
}

/// A list of tags.
pub trait TypeList: 'static {
    /// Number of entries, gaps included.
    const LEN: usize;

    /// True when no tag occurs twice.
    const IS_SET: bool;

    /// `LEN` as a Peano number, used to pick a storage integer.
    type Len: Peano;

    #[doc(hidden)]
    fn visit_from<V: TagVisitor>(visitor: &mut V, start: usize);

    /// Visit every entry in order.
    fn each<V: TagVisitor>(visitor: &mut V) {
        Self::visit_from(visitor, 0);
    }

    /// Call `f(index, name)` for every entry in order.
    fn each_name<F: FnMut(usize, &'static str)>(f: F) {
        struct Names<F>(F);

        impl<F: FnMut(usize, &'static str)> TagVisitor for Names<F> {
            fn visit<T: Tag>(&mut self, index: usize) {
                (self.0)(index, T::NAME)
            }
        }

        Self::each(&mut Names(f));
    }
}

impl TypeList for TNil {
    const LEN: usize = 0;
    const IS_SET: bool = true;
    type Len = Z;

    fn visit_from<V: TagVisitor>(_visitor: &mut V, _start: usize) {}
}

impl<H, T> TypeList for TCons<H, T>
where
    H: Tag,
    T: TypeList + IndexOf<H>,
{
    const LEN: usize = T::LEN + 1;
    const IS_SET: bool = <T as IndexOf<H>>::INDEX == NOT_FOUND && T::IS_SET;
    type Len = S<T::Len>;

    fn visit_from<V: TagVisitor>(visitor: &mut V, start: usize) {
        visitor.visit::<H>(start);
        T::visit_from(visitor, start + 1);
    }
}

// =============================================================================
// IndexOf
// =============================================================================

/// Position of tag `X` in the list, [`NOT_FOUND`] when absent.
pub trait IndexOf<X: Tag> {
    const INDEX: usize;
}

impl<X: Tag> IndexOf<X> for TNil {
    const INDEX: usize = NOT_FOUND;
}

impl<X, H, T> IndexOf<X> for TCons<H, T>
where
    X: Tag,
    H: Tag,
    T: IndexOf<X>,
{
    const INDEX: usize = if H::KEY == X::KEY {
        0
    } else if <T as IndexOf<X>>::INDEX == NOT_FOUND {
        NOT_FOUND
    } else {
        <T as IndexOf<X>>::INDEX + 1
    };
}

/// Bit position of tag `T` in list `L`.
///
/// Fails to compile when `T` is [`Void`](super::tag::Void) or not in `L`.
#[inline]
pub fn position<L, T>() -> u32
where
    L: TypeList + IndexOf<T>,
    T: Tag,
{
    const {
        assert!(!T::IS_VOID, "void is not a valid tag");
        assert!(<L as IndexOf<T>>::INDEX < L::LEN, "tag is not an option of this flag set");
    }
    <L as IndexOf<T>>::INDEX as u32
}

// =============================================================================
// Filter / Concat
// =============================================================================

/// The list with every occurrence of tag `X` removed.
pub trait Filter<X: Tag> {
    type Out;
}

impl<X: Tag> Filter<X> for TNil {
    type Out = TNil;
}

impl<X, H, T> Filter<X> for TCons<H, T>
where
    X: Tag,
    H: Tag + TagEq<X>,
    T: Filter<X>,
{
    type Out = <<H as TagEq<X>>::Out as Bool>::If<<T as Filter<X>>::Out, TCons<H, <T as Filter<X>>::Out>>;
}

/// List concatenation.
pub trait Concat<Other> {
    type Out;
}

impl<O> Concat<O> for TNil {
    type Out = O;
}

impl<H, T, O> Concat<O> for TCons<H, T>
where
    T: Concat<O>,
{
    type Out = TCons<H, <T as Concat<O>>::Out>;
}

// =============================================================================
// MaskIn
// =============================================================================

/// Bits of this list's tags, positioned as in list `L`.
pub trait MaskIn<L> {
    fn mask_in<St: BitStorage>() -> BitSet<St>;
}

impl<L> MaskIn<L> for TNil {
    #[inline]
    fn mask_in<St: BitStorage>() -> BitSet<St> {
        BitSet::empty()
    }
}

impl<L, H, T> MaskIn<L> for TCons<H, T>
where
    L: TypeList + IndexOf<H>,
    H: Tag,
    T: MaskIn<L>,
{
    #[inline]
    fn mask_in<St: BitStorage>() -> BitSet<St> {
        T::mask_in::<St>().with(position::<L, H>())
    }
}

// =============================================================================
// Static checks
// =============================================================================

const _: () = {
    assert!(<macros::type_list![i32, char, f32] as IndexOf<i32>>::INDEX == 0);
    assert!(<macros::type_list![char, i32, f32] as IndexOf<i32>>::INDEX == 1);
    assert!(<macros::type_list![char, f32, i32] as IndexOf<i32>>::INDEX == 2);
    assert!(<macros::type_list![char, f32] as IndexOf<i32>>::INDEX == NOT_FOUND);
    assert!(<TNil as IndexOf<i32>>::INDEX == NOT_FOUND);

    assert!(<macros::type_list![i32, char, f32] as TypeList>::IS_SET);
    assert!(!<TCons<i32, TCons<char, TCons<i32, TNil>>> as TypeList>::IS_SET);
    assert!(<macros::type_list![i32, char, f32] as TypeList>::LEN == 3);
};

const _: PhantomData<<TCons<i32, TCons<char, TCons<f32, TCons<i32, TNil>>>> as Filter<i32>>::Out> =
    PhantomData::<macros::type_list![char, f32]>;

const _: PhantomData<<macros::type_list![i32] as Concat<macros::type_list![char, f32]>>::Out> =
    PhantomData::<macros::type_list![i32, char, f32]>;
