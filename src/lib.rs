#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables the `to_vec`/`names` helpers in no_std

//! # typeflags
//!
//! Type-safe flag sets over closed option lists.
//!
//! A flag set is a small integer bitmask holding a subset of a fixed list of
//! options. The crate offers four designs that differ in how an option is
//! named and how its bit index is found:
//!
//! | Design | Options | Bit index |
//! |--------|---------|-----------|
//! | [`BitFlags`] | variants of one enum | the discriminant |
//! | [`RepeatedFlags`] | listed variants of one enum | `discriminant - min` |
//! | [`TagFlags`] | types, with [`Void`] gaps | position in the type list |
//! | [`ValueFlags`] | values of any enums, with `_` gaps | position in the value list |
//!
//! Misuse is rejected while compiling: repeated options, flags that are not
//! options, gaps used as flags, and sets wider than 128 bits.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Nibble (X0-XF), HashStream, Peano                        |
//! |  - BitStorage (u8..u128), storage selection, BitSet               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Meta                                                    |
//! |  - Tag + TypeList (TNil/TCons), Value + ValueList                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Flag sets                                               |
//! |  - BitFlags, RepeatedFlags, TagFlags, ValueFlags                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Tags are compared by the FNV-1a hash of their full path. The hash is a
//! `u64` constant for const evaluation and a nibble stream for the trait
//! solver, which is what lets [`type_list::Filter`](meta::type_list::Filter)
//! drop the gaps of a list at the type level.
//!
//! ## Quick Start
//!
//! ```
//! use typeflags::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog, Wolf = 3 }
//!
//! impl core::fmt::Display for Animal {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str(self.name())
//!     }
//! }
//!
//! type Animals = BitFlags<Animal>;
//! enum_flag_ops!(Animal => Animals);
//!
//! let pack = Animal::Cat | Animal::Dog;
//! assert_eq!(pack.to_string(), "Cat | Dog");
//! assert_eq!(((pack & Animal::Cat) | Animal::Wolf).to_string(), "Cat | Wolf");
//! ```

// Allow `::typeflags` to work inside the crate itself
extern crate self as typeflags;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for repeated_flags! / value_flags!
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Meta
// =============================================================================
pub mod meta;

// =============================================================================
// Layer 2: Flag sets
// =============================================================================
pub mod error;
mod ops;
pub mod checked;
pub mod bitnumber;
pub mod repeated;
pub mod tagtype;
pub mod tagvalue;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use bitnumber::BitFlags;
pub use checked::CheckedFlag;
pub use error::FlagError;
pub use meta::tag::{Tag, Void};
pub use meta::type_list::{TCons, TNil, TypeList};
pub use meta::value::{Enumerant, Value};
pub use meta::value_list::ValueList;
pub use repeated::RepeatedFlags;
pub use tagtype::{Flag, FlagList, FlagVisitor, TagFlags};
pub use tagvalue::ValueFlags;

// Re-export proc-macros
pub use macros::{type_list, Enumerant, Tag};
#[doc(hidden)]
pub use macros::make_tag_stream;

// =============================================================================
// Declarative Macro Bridge for the derives
// =============================================================================
//
// The derives only know the type's name. These bridges add
// `concat!(module_path!(), ...)` at the call site so the key covers the full
// path; `make_tag_stream!` then receives the expanded string.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Tag)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_tag {
    ($ty:ident, $name:expr) => {
        impl $crate::Tag for $ty {
            const NAME: &'static str = $name;
            const KEY: u64 = $crate::primitives::const_utils::fnv1a_64_str(concat!(module_path!(), "::", $name));
            type Stream = $crate::make_tag_stream!(concat!(module_path!(), "::", $name));
        }
    };
}

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Enumerant)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_enumerant {
    ($ty:ident, $name:expr, [$($variant:ident),+ $(,)?]) => {
        impl $ty {
            #[doc(hidden)]
            #[inline]
            pub const fn __flag_value(self) -> $crate::Value {
                match self {
                    $(
                        Self::$variant => $crate::Value::new(
                            <Self as $crate::Enumerant>::KEY,
                            Self::$variant as i128,
                            stringify!($variant),
                        ),
                    )+
                }
            }
        }

        impl $crate::Enumerant for $ty {
            const TYPE_NAME: &'static str = $name;
            const KEY: u64 = $crate::primitives::const_utils::fnv1a_64_str(concat!(module_path!(), "::", $name));
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const VALUES: &'static [$crate::Value] = &[$(Self::$variant.__flag_value()),+];

            #[inline]
            fn value(self) -> $crate::Value {
                self.__flag_value()
            }
        }
    };
}

/// Common items for declaring and using flag sets.
pub mod prelude {
    pub use crate::{
        // Flag sets
        BitFlags, RepeatedFlags, TagFlags, ValueFlags,
        // Options
        Enumerant, Flag, FlagList, FlagVisitor, Tag, TypeList, Value, Void,
        // Errors
        FlagError,
    };
    pub use crate::{enum_flag_ops, flag, flag_list, repeated_flags, type_list, value_flags};
}
