//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the lists and the flag sets:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Nibble streams, Peano numbers, stream equality.
//! - `const_utils.rs`: Const-evaluable hashing helpers.
//! - `bits.rs`: Storage integers and storage selection.
//! - `bitset.rs`: The bit container every flag set wraps.

pub mod bool;
pub mod nibble;
pub mod stream;
pub mod const_utils;
pub mod bits;
pub mod bitset;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{HashStream, HashStream16, StreamEq, Peano, Z, S, KeyDepth};
pub use bits::{BitStorage, Width, StorageWidth, PeanoStorage, bytes_for_bits};
pub use bitset::{BitSet, Ones};
