//! Procedural macros for the typeflags crate
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Tag)]` | unit struct | Make a type usable as a flag name |
//! | `#[derive(Enumerant)]` | field-less enum | Make variants usable as flag options |
//! | `type_list![]` | - | Build a type list |
//!
//! The rest (`peano!`, `storage_table!`, `make_tag_stream!`) generate tables
//! and bridge code inside typeflags itself.
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Tag)]
//! struct Cat;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
//! enum Animal { Cat, Dog, Wolf = 3 }
//!
//! type Cats = TagFlags<type_list![Cat, Void, u8]>;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(128);  // Generates D0 = Z, D1 = S<D0>, ..., D128 = S<D127>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate `PeanoStorage` impls for D0..Dn.
///
/// Each `Dk` maps to the narrowest storage integer holding `k` bits.
#[proc_macro]
pub fn storage_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::storage_table::expand_storage_table(input).into()
}

/// Internal: compute the nibble stream of a tag from its full path.
///
/// Input is a string literal or a `concat!(..)` expression; the latter is
/// hashed by const evaluation.
#[proc_macro]
pub fn make_tag_stream(input: TokenStream) -> TokenStream {
    inner::tag_stream::expand_make_tag_stream(input.into()).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Build a type list: `type_list![A, B, C]` is `TCons<A, TCons<B, TCons<C, TNil>>>`.
///
/// A type may appear only once; `Void` gaps may repeat.
#[proc_macro]
pub fn type_list(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::type_list::TypeListInput);
    let types: Vec<_> = input.types.into_iter().collect();

    if let Err(err) = user::type_list::check_duplicates(&types) {
        return err.to_compile_error().into();
    }

    user::type_list::build_type_list(&types).into()
}

/// Derive `Tag` for a unit struct.
///
/// The tag's key is the hash of `module_path!() :: Name`, so equally named
/// structs in different modules are different tags.
#[proc_macro_derive(Tag)]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match user::derive_tag::expand_derive_tag(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `Enumerant` for a field-less enum.
///
/// Also adds an inherent `const fn __flag_value(self) -> Value`, which the
/// declaring macros call in const context.
#[proc_macro_derive(Enumerant)]
pub fn derive_enumerant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match user::derive_enumerant::expand_derive_enumerant(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
