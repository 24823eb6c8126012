//! Runtime errors of the fallible constructors.
//!
//! Everything that can be checked while compiling is; these cover inputs that
//! only exist at runtime (a value read from somewhere, raw bits).

use thiserror::Error;

/// Why a value or bit pattern was rejected by a flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The value is not one of the flag set's options.
    #[error("`{type_name}::{value}` is not an option of this flag set")]
    NotAnOption {
        type_name: &'static str,
        value: &'static str,
    },

    /// A bit is set that no option maps to.
    #[error("bit {index} does not belong to any of the {bit_count} flag bits")]
    OutOfRange { index: u32, bit_count: u32 },
}
