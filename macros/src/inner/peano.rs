//! Peano alias and storage table input.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

/// Largest table the crate asks for; guards against typos like `peano!(12800)`.
const MAX_TABLE: usize = 1024;

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > MAX_TABLE {
            return Err(syn::Error::new_spanned(
                &lit,
                format!("table size {max} exceeds the limit of {MAX_TABLE}"),
            ));
        }
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (1..=input.max).map(|n| {
        let curr = format_ident!("D{}", n);
        let prev = format_ident!("D{}", n - 1);
        let doc = format!("Peano number {n}.");
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Peano number 0.
        pub type D0 = Z;
        #(#aliases)*
    }
}
