//! Shared field handling for struct and enum derivation.
//!
//! Every visited field gets one entry in the generated `FIELDS` table and one
//! `visit_field` call. The call passes the field's descriptor, a mutable
//! binding, and, for sensitive fields only, the redaction marker of the
//! field's type.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{parse_quote, WherePredicate};

use crate::{
    generics::{collect_generics_from_type, mentions_generics},
    marking::Marking,
    types::type_name,
};

/// One declared field, as seen by the derive.
pub(crate) struct DeclaredField<'a> {
    /// Field name as reported at runtime: the identifier, or the position
    /// for tuple fields.
    pub(crate) name: String,
    /// Enclosing variant, for enum fields.
    pub(crate) variant: Option<&'a Ident>,
    pub(crate) binding: &'a Ident,
    pub(crate) ty: &'a syn::Type,
    pub(crate) span: Span,
    pub(crate) marking: Marking,
}

/// Accumulated state while processing the fields of one type.
///
/// Struct and enum derivation feed every field through
/// [`FieldTables::visit_statement`] and read the collected tables afterwards.
pub(crate) struct FieldTables<'a> {
    generics: &'a syn::Generics,
    crate_root: &'a TokenStream,
    pub(crate) descriptors: Vec<TokenStream>,
    pub(crate) used_generics: Vec<Ident>,
    pub(crate) marker_predicates: Vec<WherePredicate>,
    pub(crate) debug_redacted_generics: Vec<Ident>,
    pub(crate) debug_unredacted_generics: Vec<Ident>,
}

impl<'a> FieldTables<'a> {
    pub(crate) fn new(generics: &'a syn::Generics, crate_root: &'a TokenStream) -> Self {
        Self {
            generics,
            crate_root,
            descriptors: Vec::new(),
            used_generics: Vec::new(),
            marker_predicates: Vec::new(),
            debug_redacted_generics: Vec::new(),
            debug_unredacted_generics: Vec::new(),
        }
    }

    /// Registers a field and returns the statement that reports it to the
    /// visitor. Skipped fields produce no statement and no descriptor.
    ///
    /// ## Field Rules
    ///
    /// | Marking | Descriptor | Marker passed | Bound on generics |
    /// |---------|------------|---------------|-------------------|
    /// | `Plain` | yes | `None` | `Sanitize` |
    /// | `Sensitive` | yes | `Some(redaction_marker)` | `Sanitize`, plus `RedactionMarker` on the field type |
    /// | `Skip` | no | - | none |
    pub(crate) fn visit_statement(&mut self, field: &DeclaredField<'_>) -> TokenStream {
        let DeclaredField {
            name,
            variant,
            binding,
            ty,
            span,
            marking,
        } = field;
        let span = *span;
        let root = self.crate_root;

        if *marking == Marking::Skip {
            return quote! {};
        }

        collect_generics_from_type(ty, self.generics, &mut self.debug_unredacted_generics);
        // The redacted Debug prints the sentinel for sensitive fields.
        if !marking.is_sensitive() {
            collect_generics_from_type(ty, self.generics, &mut self.debug_redacted_generics);
        }
        collect_generics_from_type(ty, self.generics, &mut self.used_generics);

        let index = self.descriptors.len();
        let sensitive = marking.is_sensitive();
        let ty_name = type_name(ty);
        let descriptor = match variant {
            Some(variant) => {
                let variant = variant.to_string();
                quote! {
                    #root::FieldDescriptor::new(#name, #ty_name, #sensitive).in_variant(#variant)
                }
            }
            None => quote! { #root::FieldDescriptor::new(#name, #ty_name, #sensitive) },
        };
        self.descriptors.push(descriptor);

        if sensitive {
            if mentions_generics(ty, self.generics) {
                self.marker_predicates
                    .push(parse_quote!(#ty: #root::RedactionMarker));
            }
            quote_spanned! { span =>
                {
                    let __marker: fn() -> #ty = <#ty as #root::RedactionMarker>::redaction_marker;
                    __visitor.visit_field(
                        &<Self as #root::Sanitize>::FIELDS[#index],
                        #binding,
                        ::core::option::Option::Some(__marker),
                    );
                }
            }
        } else {
            quote_spanned! { span =>
                __visitor.visit_field(
                    &<Self as #root::Sanitize>::FIELDS[#index],
                    #binding,
                    ::core::option::Option::None,
                );
            }
        }
    }
}

/// Returns the `Debug` statements for one field as `(redacted, unredacted)`,
/// or `None` for skipped fields, which the generated `Debug` leaves out.
///
/// `label` is the field name for named fields and `None` for tuple fields.
pub(crate) fn debug_statements(
    label: Option<&str>,
    binding: &Ident,
    span: Span,
    marking: Marking,
    crate_root: &TokenStream,
) -> Option<(TokenStream, TokenStream)> {
    if marking == Marking::Skip {
        return None;
    }
    let shown = if marking.is_sensitive() {
        quote! { &#crate_root::REDACTED }
    } else {
        quote! { #binding }
    };
    Some(match label {
        Some(label) => (
            quote_spanned! { span => __debug.field(#label, #shown); },
            quote_spanned! { span => __debug.field(#label, #binding); },
        ),
        None => (
            quote_spanned! { span => __debug.field(#shown); },
            quote_spanned! { span => __debug.field(#binding); },
        ),
    })
}
