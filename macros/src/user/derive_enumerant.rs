use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::common::reject_generics;

/// #[derive(Enumerant)]: validate the enum, then hand the variant list to the
/// `__impl_enumerant!` bridge so the key picks up `module_path!()`.
pub fn expand_derive_enumerant(input: DeriveInput) -> syn::Result<TokenStream2> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Enumerant can only be derived for enums",
            ));
        }
    };
    reject_generics(&input, "Enumerant")?;

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Enumerant needs at least one variant",
        ));
    }

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Enumerant variants cannot have fields",
            ));
        }
    }

    let ident = &input.ident;
    let ident_str = ident.to_string();
    let names = variants.iter().map(|v| &v.ident);

    Ok(quote! {
        ::typeflags::__impl_enumerant!(#ident, #ident_str, [#(#names),*]);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_enum_expands_to_bridge() {
        let input: DeriveInput = syn::parse_quote!(enum Animal { Cat, Dog, Wolf = 3 });
        let tokens = expand_derive_enumerant(input).unwrap().to_string();
        assert!(tokens.contains("__impl_enumerant"));
        assert!(tokens.contains("Wolf"));
    }

    #[test]
    fn misuse_is_rejected() {
        let data: DeriveInput = syn::parse_quote!(enum Shape { Circle(f32) });
        assert!(expand_derive_enumerant(data).is_err());

        let empty: DeriveInput = syn::parse_quote!(enum Never {});
        assert!(expand_derive_enumerant(empty).is_err());

        let structure: DeriveInput = syn::parse_quote!(struct Cat;);
        assert!(expand_derive_enumerant(structure).is_err());
    }
}
