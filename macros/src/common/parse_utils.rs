//! Common parsing helpers
//!
//! Shared checks so every macro reports misuse the same way.

use syn::{DeriveInput, Type};

/// Reject generic items: a flag name has to be one concrete type.
pub fn reject_generics(input: &DeriveInput, derive: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        &input.generics,
        format!("{derive} cannot be derived for generic types"),
    ))
}

/// Whether `ty` names the `Void` gap (`Void`, `typeflags::Void`, ...).
pub fn is_void(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Void" && segment.arguments.is_empty()),
        Type::Group(group) => is_void(&group.elem),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_is_recognised_by_last_segment() {
        assert!(is_void(&syn::parse_quote!(Void)));
        assert!(is_void(&syn::parse_quote!(::typeflags::Void)));
        assert!(!is_void(&syn::parse_quote!(Voided)));
        assert!(!is_void(&syn::parse_quote!(Void<u8>)));
    }

    #[test]
    fn generics_are_rejected() {
        let input: DeriveInput = syn::parse_quote!(struct Marker<T>(T););
        assert!(reject_generics(&input, "Tag").is_err());
        let input: DeriveInput = syn::parse_quote!(struct Marker;);
        assert!(reject_generics(&input, "Tag").is_ok());
    }
}
