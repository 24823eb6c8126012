//! `PeanoStorage` table: list length -> storage integer.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::peano::PeanoInput;

pub fn expand_storage_table(input: PeanoInput) -> TokenStream {
    let impls = (0..=input.max).map(|bits| {
        let peano = format_ident!("D{}", bits);
        let bytes = bits.div_ceil(8);
        quote! {
            impl ::typeflags::primitives::bits::PeanoStorage for ::typeflags::primitives::stream::#peano {
                type Out = <::typeflags::primitives::bits::Width<#bytes> as ::typeflags::primitives::bits::StorageWidth>::Out;
            }
        }
    });

    quote! { #(#impls)* }
}
