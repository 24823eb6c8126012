use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::common::reject_generics;

/// #[derive(Tag)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// 1. #[derive(Tag)] (proc-macro) -> generates __impl_tag! call
/// 2. __impl_tag! (decl-macro) -> passes concat!() to make_tag_stream!
/// 3. make_tag_stream! (proc-macro) -> emits the const-evaluated stream
pub fn expand_derive_tag(input: DeriveInput) -> syn::Result<TokenStream2> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        Data::Struct(data) => {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "Tag can only be derived for unit structs",
            ));
        }
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tag can only be derived for unit structs",
            ));
        }
    }
    reject_generics(&input, "Tag")?;

    let ident = &input.ident;
    let ident_str = ident.to_string();

    Ok(quote! {
        ::typeflags::__impl_tag!(#ident, #ident_str);
    })
}
