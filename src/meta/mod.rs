//! # Layer 1: Meta
//!
//! Compile-time lists the flag sets are built from:
//! - `tag.rs`: Types usable as flag names, and the `Void` gap.
//! - `type_list.rs`: Type lists with index lookup, filtering and visitation.
//! - `value.rs`: Enum values with a type identity, and the `Enumerant` trait.
//! - `value_list.rs`: Const-evaluable value lists.

pub mod tag;
pub mod type_list;
pub mod value;
pub mod value_list;

pub use tag::{Tag, TagEq, Void};
pub use type_list::{
    position, Concat, Filter, IndexOf, MaskIn, TCons, TNil, TagVisitor, TypeList, NOT_FOUND,
};
pub use value::{Enumerant, Value};
pub use value_list::ValueList;
