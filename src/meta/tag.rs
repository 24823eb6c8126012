//! Tags: types that name flags.
//!
//! A tag's identity is the FNV-1a hash of its full path. The hash is available
//! twice: as a `u64` constant for const evaluation ([`Tag::KEY`]) and spelled as
//! a nibble stream ([`Tag::Stream`]) so the trait solver can compare two tags.

use crate::primitives::stream::{HashStream, KeyDepth, StreamEq};
use crate::primitives::Bool;

/// A type usable as a flag name.
///
/// Derive it with `#[derive(Tag)]` on a unit struct; the primitive types
/// already implement it.
pub trait Tag: 'static {
    /// Label used by `Display`.
    const NAME: &'static str;

    /// FNV-1a 64 of the tag's full path.
    const KEY: u64;

    /// True only for [`Void`], the gap placeholder.
    const IS_VOID: bool = false;

    /// The key as a nibble stream, for type-level comparison.
    type Stream: HashStream;
}

/// Type-level tag equality.
pub trait TagEq<Other: Tag>: Tag {
    type Out: Bool;
}

impl<A, B> TagEq<B> for A
where
    A: Tag,
    B: Tag,
    A::Stream: StreamEq<B::Stream, KeyDepth>,
{
    type Out = <A::Stream as StreamEq<B::Stream, KeyDepth>>::Out;
}

/// Gap placeholder: occupies a bit in a tag list but is never a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Void;

impl Tag for Void {
    const NAME: &'static str = "void";
    const KEY: u64 = crate::primitives::const_utils::fnv1a_64_str("typeflags::Void");
    const IS_VOID: bool = true;
    type Stream = macros::make_tag_stream!("typeflags::Void");
}

macro_rules! impl_primitive_tags {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Tag for $ty {
                const NAME: &'static str = stringify!($ty);
                const KEY: u64 = crate::primitives::const_utils::fnv1a_64_str(concat!("core::", stringify!($ty)));
                type Stream = macros::make_tag_stream!(concat!("core::", stringify!($ty)));
            }
        )*
    };
}

impl_primitive_tags!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

const _: () = {
    assert!(<Void as Tag>::IS_VOID);
    assert!(!<i32 as Tag>::IS_VOID);
    assert!(<i32 as Tag>::KEY != <u32 as Tag>::KEY);
    assert!(<<i32 as TagEq<i32>>::Out as Bool>::VALUE);
    assert!(!<<i32 as TagEq<char>>::Out as Bool>::VALUE);
    assert!(!<<Void as TagEq<f32>>::Out as Bool>::VALUE);
};
