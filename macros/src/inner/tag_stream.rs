//! Tag nibble streams.

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::fnv1a_64;

/// `HashStream16<..>` spelling the FNV-1a hash of the input, low nibble first.
pub fn expand_make_tag_stream(input: TokenStream) -> TokenStream {
    // A literal is hashed right here.
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        let hash = fnv1a_64(&lit.value());
        let nibbles = (0..16u32).map(|i| ((hash >> (i * 4)) & 0xF) as u8);
        return quote! {
            ::typeflags::primitives::stream::HashStream16<#(#nibbles),*>
        };
    }

    // Anything else (`concat!(module_path!(), ..)`) is hashed by const evaluation.
    let nibbles = (0..16u8).map(|i| {
        quote! { { ::typeflags::primitives::const_utils::hash_nibble(#input, #i) } }
    });
    quote! {
        ::typeflags::primitives::stream::HashStream16<#(#nibbles),*>
    }
}
