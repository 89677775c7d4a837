//! Enum-specific `Sanitize` derivation.
//!
//! Enums whose variants carry no fields are leaves and get no visit body.
//! Otherwise each variant gets a match arm that reports the fields of the
//! active variant.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    marking::{parse_field_marking, Marking},
    transform::{debug_statements, DeclaredField, FieldTables},
    DeriveBodies,
};

/// Context for deriving a single enum variant.
struct VariantContext<'a> {
    name: &'a Ident,
    variant_ident: &'a Ident,
    crate_root: &'a TokenStream,
    arms: &'a mut Vec<TokenStream>,
    debug_redacted_arms: &'a mut Vec<TokenStream>,
    debug_unredacted_arms: &'a mut Vec<TokenStream>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: &DataEnum,
    tables: &mut FieldTables<'_>,
    crate_root: &TokenStream,
) -> Result<DeriveBodies> {
    if data.variants.is_empty() {
        return Ok(DeriveBodies {
            visit_body: None,
            debug_redacted_body: quote! { match *self {} },
            debug_unredacted_body: quote! { match *self {} },
        });
    }

    let leaf = data
        .variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit));

    let mut arms = Vec::new();
    let mut debug_redacted_arms = Vec::new();
    let mut debug_unredacted_arms = Vec::new();

    for variant in &data.variants {
        let mut variant_ctx = VariantContext {
            name,
            variant_ident: &variant.ident,
            crate_root,
            arms: &mut arms,
            debug_redacted_arms: &mut debug_redacted_arms,
            debug_unredacted_arms: &mut debug_unredacted_arms,
        };

        match &variant.fields {
            Fields::Unit => derive_unit_variant(&mut variant_ctx),
            Fields::Named(fields) => derive_named_variant(&mut variant_ctx, tables, fields)?,
            Fields::Unnamed(fields) => derive_unnamed_variant(&mut variant_ctx, tables, fields)?,
        }
    }

    let visit_body = if leaf {
        None
    } else {
        Some(quote! {
            match self {
                #(#arms),*
            }
        })
    };

    Ok(DeriveBodies {
        visit_body,
        debug_redacted_body: quote! {
            match self {
                #(#debug_redacted_arms),*
            }
        },
        debug_unredacted_body: quote! {
            match self {
                #(#debug_unredacted_arms),*
            }
        },
    })
}

fn derive_unit_variant(ctx: &mut VariantContext<'_>) {
    let name = ctx.name;
    let variant_ident = ctx.variant_ident;

    ctx.arms.push(quote! { #name::#variant_ident => {} });
    ctx.debug_redacted_arms.push(quote! {
        #name::#variant_ident => __f.write_str(stringify!(#name::#variant_ident))
    });
    ctx.debug_unredacted_arms.push(quote! {
        #name::#variant_ident => __f.write_str(stringify!(#name::#variant_ident))
    });
}

fn derive_named_variant(
    variant_ctx: &mut VariantContext<'_>,
    tables: &mut FieldTables<'_>,
    fields: &syn::FieldsNamed,
) -> Result<()> {
    let name = variant_ctx.name;
    let variant_ident = variant_ctx.variant_ident;
    let crate_root = variant_ctx.crate_root;

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
            variant: Some(variant_ident),
            binding,
            ty: &field.ty,
            span,
            marking,
        }));
        if marking != Marking::Skip {
            visited.push(binding);
        }
    }

    let pattern = quote! { #name::#variant_ident { #(#visited,)* .. } };
    variant_ctx.arms.push(quote! {
        #pattern => {
            #(#visits)*
        }
    });
    variant_ctx.debug_redacted_arms.push(quote! {
        #pattern => {
            let mut __debug = __f.debug_struct(stringify!(#name::#variant_ident));
            #(#debug_redacted_fields)*
            __debug.finish()
        }
    });
    variant_ctx.debug_unredacted_arms.push(quote! {
        #pattern => {
            let mut __debug = __f.debug_struct(stringify!(#name::#variant_ident));
            #(#debug_unredacted_fields)*
            __debug.finish()
        }
    });
    Ok(())
}

fn derive_unnamed_variant(
    variant_ctx: &mut VariantContext<'_>,
    tables: &mut FieldTables<'_>,
    fields: &syn::FieldsUnnamed,
) -> Result<()> {
    let name = variant_ctx.name;
    let variant_ident = variant_ctx.variant_ident;
    let crate_root = variant_ctx.crate_root;

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
            variant: Some(variant_ident),
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

    let pattern = quote! { #name::#variant_ident ( #(#patterns),* ) };
    variant_ctx.arms.push(quote! {
        #pattern => {
            #(#visits)*
        }
    });
    variant_ctx.debug_redacted_arms.push(quote! {
        #pattern => {
            let mut __debug = __f.debug_tuple(stringify!(#name::#variant_ident));
            #(#debug_redacted_fields)*
            __debug.finish()
        }
    });
    variant_ctx.debug_unredacted_arms.push(quote! {
        #pattern => {
            let mut __debug = __f.debug_tuple(stringify!(#name::#variant_ident));
            #(#debug_unredacted_fields)*
            __debug.finish()
        }
    });
    Ok(())
}
