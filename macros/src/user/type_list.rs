//! Type list construction

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use crate::common::is_void;

// =============================================================================
// type_list! Input Parser
// =============================================================================

pub struct TypeListInput {
    pub types: Punctuated<Type, Token![,]>,
}

impl Parse for TypeListInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(TypeListInput { types })
    }
}

/// Check for types listed twice. `Void` gaps may repeat.
///
/// Only catches spelled-out duplicates; aliases are caught later by the
/// flag set's `IS_SET` check.
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types.iter().filter(|ty| !is_void(ty)) {
        let ty_str = ty.to_token_stream().to_string().replace(' ', "");
        if !seen.insert(ty_str.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate type `{}`\n\
                     \n\
                     Each type may appear only once in a type list; \
                     use `Void` for gaps.",
                    ty_str
                ),
            ));
        }
    }
    Ok(())
}

/// Build `TCons<A, TCons<B, TNil>>`, right to left.
pub fn build_type_list(types: &[Type]) -> TokenStream2 {
    types.iter().rev().fold(
        quote! { ::typeflags::meta::type_list::TNil },
        |tail, head| quote! { ::typeflags::meta::type_list::TCons<#head, #tail> },
    )
}
