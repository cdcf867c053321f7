//! Procedural macro for deriving `Record` implementations.
//!
//! This crate provides the `#[derive(Record)]` macro which generates:
//! - `Record` trait implementation listing the struct's fields in order
//! - An inherent `questions()` method returning questions bound to the fields
//! - An inherent `ask()` method asking for the fields on the console

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, Type, parse_macro_input};

/// Derive the `Record` trait for a struct with named fields.
///
/// # Attributes
///
/// ## On fields
/// - `#[question("default,prompt")]` - Tag with the default answer and the prompt text
/// - `#[question]` - Empty tag: no default, the prompt is the field name followed by `?`
/// - `#[question(skip)]` - Never ask for this field
///
/// Fields without an attribute behave like `#[question]`. Only `String` fields
/// are asked for; fields of any other type are skipped.
#[proc_macro_derive(Record, attributes(question))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    implement_record(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn implement_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        let attrs = FieldAttrs::extract(&field.attrs)?;

        let tag = match &attrs.tag {
            Some(tag) => quote! { Some(#tag) },
            None => quote! { None },
        };

        if attrs.skip || !is_string(&field.ty) {
            descriptors.push(quote! {
                derive_ask::Field::read_only(#field_name, #tag)
            });
        } else {
            descriptors.push(quote! {
                derive_ask::Field::new(#field_name, #tag, &mut self.#ident)
            });
        }
    }

    Ok(quote! {
        impl #impl_generics derive_ask::Record for #name #ty_generics #where_clause {
            fn fields(
                &mut self,
            ) -> Result<Vec<derive_ask::Field<'_>>, derive_ask::AskError> {
                Ok(vec![#(#descriptors),*])
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Returns one question per askable field, bound to that field.
            pub fn questions(
                &mut self,
            ) -> Result<Vec<derive_ask::Question<'_>>, derive_ask::AskError> {
                derive_ask::extract_questions(self)
            }

            /// Asks for every askable field on standard input and output.
            pub fn ask(&mut self) -> Result<(), derive_ask::AskError> {
                derive_ask::ask(self)
            }
        }
    })
}

// ============================================================================
// Attribute Extraction
// ============================================================================

/// Attributes that can appear on fields
struct FieldAttrs {
    tag: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn extract(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut tag = None;
        let mut skip = false;
        let mut seen = false;

        for attr in attrs {
            if !attr.path().is_ident("question") {
                continue;
            }
            if seen {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[question] attribute",
                ));
            }
            seen = true;

            match &attr.meta {
                Meta::Path(_) => {}
                Meta::List(list) => {
                    if let Ok(lit) = list.parse_args::<LitStr>() {
                        tag = Some(lit.value());
                    } else {
                        let ident: syn::Ident = list.parse_args().map_err(|_| {
                            syn::Error::new_spanned(
                                attr,
                                "expected #[question(\"default,prompt\")] or #[question(skip)]",
                            )
                        })?;
                        if ident != "skip" {
                            return Err(syn::Error::new_spanned(
                                ident,
                                "unknown option, expected `skip`",
                            ));
                        }
                        skip = true;
                    }
                }
                Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected #[question(\"default,prompt\")] or #[question(skip)]",
                    ));
                }
            }
        }

        Ok(Self { tag, skip })
    }
}

/// Check if the field type is `String` (optionally path-qualified).
fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_empty()),
        Type::Group(group) => is_string(&group.elem),
        Type::Paren(paren) => is_string(&paren.elem),
        _ => false,
    }
}
