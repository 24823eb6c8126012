// Helpers shared by the internal and user-facing macros.

mod hash;
mod parse_utils;

pub use hash::*;
pub use parse_utils::*;
