//! Struct-specific `Sanitize` derivation.
//!
//! This module binds struct fields mutably, reports each one to the visitor,
//! and builds the matching `Debug` bodies.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    marking::{parse_field_marking, Marking},
    transform::{debug_statements, DeclaredField, FieldTables},
    DeriveBodies,
};

pub(crate) fn derive_struct(
    name: &Ident,
    data: &DataStruct,
    tables: &mut FieldTables<'_>,
    crate_root: &TokenStream,
) -> Result<DeriveBodies> {
    match &data.fields {
        Fields::Named(fields) => derive_named_struct(name, fields, tables, crate_root),
        Fields::Unnamed(fields) => derive_unnamed_struct(name, fields, tables, crate_root),
        Fields::Unit => Ok(DeriveBodies {
            visit_body: Some(quote! {}),
            debug_redacted_body: quote! {
                __f.write_str(stringify!(#name))
            },
            debug_unredacted_body: quote! {
                __f.write_str(stringify!(#name))
            },
        }),
    }
}

fn derive_named_struct(
    name: &Ident,
    fields: &syn::FieldsNamed,
    tables: &mut FieldTables<'_>,
    crate_root: &TokenStream,
) -> Result<DeriveBodies> {
    let mut visited = Vec::new();
    let mut visits = Vec::new();
    let mut debug_redacted_fields = Vec::new();
    let mut debug_unredacted_fields = Vec::new();

    for field in &fields.named {
        let span = field.span();
        let marking = parse_field_marking(&field.attrs)?;
        let binding = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(span, "named field without an identifier"))?;
        let label = binding.unraw().to_string();

        if let Some((redacted, unredacted)) =
            debug_statements(Some(&label), binding, span, marking, crate_root)
        {
            debug_redacted_fields.push(redacted);
            debug_unredacted_fields.push(unredacted);
        }
        visits.push(tables.visit_statement(&DeclaredField {
            name: label,
            variant: None,
            binding,
            ty: &field.ty,
            span,
            marking,
        }));
        if marking != Marking::Skip {
            visited.push(binding);
        }
    }

    let pattern = quote! { Self { #(#visited,)* .. } };
    Ok(DeriveBodies {
        visit_body: Some(quote! {
            let #pattern = self;
            #(#visits)*
        }),
        debug_redacted_body: quote! {
            match self {
                #pattern => {
                    let mut __debug = __f.debug_struct(stringify!(#name));
                    #(#debug_redacted_fields)*
                    __debug.finish()
                }
            }
        },
        debug_unredacted_body: quote! {
            match self {
                #pattern => {
                    let mut __debug = __f.debug_struct(stringify!(#name));
                    #(#debug_unredacted_fields)*
                    __debug.finish()
                }
            }
        },
    })
}

fn derive_unnamed_struct(
    name: &Ident,
    fields: &syn::FieldsUnnamed,
    tables: &mut FieldTables<'_>,
    crate_root: &TokenStream,
) -> Result<DeriveBodies> {
    let mut patterns = Vec::new();
    let mut visits = Vec::new();
    let mut debug_redacted_fields = Vec::new();
    let mut debug_unredacted_fields = Vec::new();

    for (index, field) in fields.unnamed.iter().enumerate() {
        let binding = format_ident!("field_{index}");
        let span = field.span();
        let marking = parse_field_marking(&field.attrs)?;

        if let Some((redacted, unredacted)) =
            debug_statements(None, &binding, span, marking, crate_root)
        {
            debug_redacted_fields.push(redacted);
            debug_unredacted_fields.push(unredacted);
        }
        visits.push(tables.visit_statement(&DeclaredField {
            name: index.to_string(),
            variant: None,
            binding: &binding,
            ty: &field.ty,
            span,
            marking,
        }));
        patterns.push(if marking == Marking::Skip {
            quote! { _ }
        } else {
            quote! { #binding }
        });
    }

    let pattern = quote! { Self ( #(#patterns),* ) };
    Ok(DeriveBodies {
        visit_body: Some(quote! {
            let #pattern = self;
            #(#visits)*
        }),
        debug_redacted_body: quote! {
            match self {
                #pattern => {
                    let mut __debug = __f.debug_tuple(stringify!(#name));
                    #(#debug_redacted_fields)*
                    __debug.finish()
                }
            }
        },
        debug_unredacted_body: quote! {
            match self {
                #pattern => {
                    let mut __debug = __f.debug_tuple(stringify!(#name));
                    #(#debug_unredacted_fields)*
                    __debug.finish()
                }
            }
        },
    })
}
