//! Derive macros for the Tasklist framework
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates wire-kind helpers for action enums
//!
//! # Example
//!
//! ```ignore
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TaskAction {
//!     Add { name: String },
//!
//!     #[action(kind = "remove")]
//!     Delete { id: String },
//! }
//!
//! // Generated items:
//! assert_eq!(TaskAction::Add { name: "x".into() }.kind(), "add");
//! assert_eq!(TaskAction::KINDS, &["add", "remove"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Generates for the enum:
/// - `kind()` - The wire name of the variant (`&'static str`)
/// - `KINDS` - Every wire name, in declaration order
///
/// The wire name is the variant name lower-cased, unless the variant carries
/// `#[action(kind = "...")]`.
///
/// # Errors
///
/// Produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants share a wire name
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(name, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut kinds: Vec<String> = Vec::with_capacity(data_enum.variants.len());
    let mut kind_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let kind = match kind_override(&variant.attrs) {
            Ok(Some(kind)) => kind,
            Ok(None) => variant_name.to_string().to_lowercase(),
            Err(error) => return error.to_compile_error().into(),
        };

        if kinds.contains(&kind) {
            return syn::Error::new_spanned(
                variant_name,
                format!("duplicate action kind \"{kind}\""),
            )
            .to_compile_error()
            .into();
        }

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };
        kind_arms.push(quote! { #pattern => #kind, });
        kinds.push(kind);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Wire names of every action kind, in declaration order
            pub const KINDS: &'static [&'static str] = &[#(#kinds),*];

            /// Returns the wire name of this action's kind
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match *self {
                    #(#kind_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(kind = "...")]` from a variant's attributes
fn kind_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut kind = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                let value: LitStr = meta.value()?.parse()?;
                kind = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `kind = \"...\"`"))
            }
        })?;
    }

    Ok(kind)
}
