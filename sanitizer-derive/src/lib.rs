//! Derive macro for `sanitizer`.
//!
//! This crate generates the field enumeration behind `#[derive(Sanitize)]`. It:
//! - reads `#[sensitive]` and `#[sanitizer(...)]` attributes
//! - emits a `Sanitize` implementation: the type's kind, a descriptor per
//!   field, and a `visit_fields` body that hands each field to a visitor
//!
//! It does **not** walk anything. Depth bookkeeping and redaction live in the
//! main `sanitizer` crate and run at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod marking;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_debug_bounds, add_sanitize_bounds};
use transform::FieldTables;

/// Derives `sanitizer::Sanitize` (and related impls) for structs and enums.
///
/// # Container Attributes
///
/// These attributes are placed on the struct/enum itself:
///
/// - `#[sanitizer(skip_debug)]` - Opt out of `Debug` impl generation. Use this when you need a
///   custom `Debug` implementation or the type already derives `Debug` elsewhere.
/// - `#[sanitizer(skip_default)]` - Treat a value equal to `Default::default()` as absent, so the
///   walk does not descend into it. Requires `PartialEq + Default`.
///
/// # Field Attributes
///
/// - **No annotation**: Leaf fields are left unchanged. Composite fields are descended into,
///   one level deeper.
///
/// - `#[sensitive]`: The field is replaced. Text-like types (`String`, `&str`, `Box<str>`, ...)
///   become `"***"`, every other type becomes its `Default` value, including composite types,
///   which are replaced wholesale and never descended into. The field type must implement
///   `Default`.
///
/// - `#[sanitizer(skip)]`: The field is opaque. It is not enumerated, not described in
///   `FIELDS`, and its type needs no `Sanitize` impl.
///
/// Enums whose variants carry no data are leaves. Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `Debug`: when *not* building with `cfg(any(test, feature = "testing"))`, sensitive fields are
///   formatted as `"***"` rather than their values. Use `#[sanitizer(skip_debug)]` on the container
///   to opt out.
/// - `slog::Value` (behind `cfg(feature = "slog")`): implemented by cloning the value and routing
///   it through `sanitizer::slog::IntoSanitizedJson`. **Note:** this impl requires the type to
///   implement `Clone` and `serde::Serialize`. The derive first looks for a top-level `slog`
///   crate; if not found, it checks the `SANITIZER_SLOG_CRATE` env var for an alternate path
///   (e.g., `my_log::slog`). If neither is available, compilation fails with a clear error.
#[proc_macro_derive(Sanitize, attributes(sensitive, sanitizer))]
pub fn derive_sanitize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the sanitizer crate root.
///
/// Handles crate renaming (e.g., `scrub = { package = "sanitizer", ... }`).
/// The `sanitizer` crate declares `extern crate self as sanitizer`, so
/// `::sanitizer` also resolves inside the crate itself, including its doctests
/// and integration tests.
fn crate_root() -> TokenStream {
    match crate_name("sanitizer") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::sanitizer },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Handles crate renaming (e.g., `my_slog = { package = "slog", ... }`).
/// If the top-level `slog` crate is not available, falls back to the
/// `SANITIZER_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("SANITIZER_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the SANITIZER_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("SANITIZER_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

/// Generated bodies for one type.
pub(crate) struct DeriveBodies {
    /// Body of `visit_fields`; `None` for leaf types.
    pub(crate) visit_body: Option<TokenStream>,
    pub(crate) debug_redacted_body: TokenStream,
    pub(crate) debug_unredacted_body: TokenStream,
}

#[allow(clippy::too_many_lines)]
fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions {
        skip_debug,
        skip_default,
    } = parse_container_options(&attrs)?;

    let crate_root = crate_root();
    let mut tables = FieldTables::new(&generics, &crate_root);

    let DeriveBodies {
        visit_body,
        debug_redacted_body,
        debug_unredacted_body,
    } = match &data {
        Data::Struct(data) => derive_struct(&ident, data, &mut tables, &crate_root)?,
        Data::Enum(data) => derive_enum(&ident, data, &mut tables, &crate_root)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Sanitize` cannot be derived for unions",
            ));
        }
    };

    let (_, self_ty_generics, _) = generics.split_for_impl();
    let self_ty: syn::Type = parse_quote!(#ident #self_ty_generics);

    let mut sanitize_generics = add_sanitize_bounds(generics.clone(), &tables.used_generics);
    if !tables.marker_predicates.is_empty() || skip_default {
        let where_clause = sanitize_generics.make_where_clause();
        where_clause
            .predicates
            .extend(tables.marker_predicates.iter().cloned());
        if skip_default {
            where_clause.predicates.push(parse_quote!(
                #self_ty: ::core::cmp::PartialEq + ::core::default::Default
            ));
        }
    }
    let (impl_generics, ty_generics, where_clause) = sanitize_generics.split_for_impl();

    let kind = if visit_body.is_some() {
        quote! { #crate_root::TypeKind::Composite }
    } else {
        quote! { #crate_root::TypeKind::Leaf }
    };
    let descriptors = &tables.descriptors;
    let visit_fn = visit_body.map(|body| {
        quote! {
            fn visit_fields<__SanitizeVisitor: #crate_root::FieldVisitor>(
                &mut self,
                __visitor: &mut __SanitizeVisitor,
            ) {
                #body
            }
        }
    });
    let is_absent_fn = skip_default.then(|| {
        quote! {
            fn is_absent(&self) -> bool {
                *self == <Self as ::core::default::Default>::default()
            }
        }
    });

    let debug_redacted_generics = add_debug_bounds(generics.clone(), &tables.debug_redacted_generics);
    let (debug_redacted_impl_generics, debug_redacted_ty_generics, debug_redacted_where_clause) =
        debug_redacted_generics.split_for_impl();
    let debug_unredacted_generics =
        add_debug_bounds(generics.clone(), &tables.debug_unredacted_generics);
    let (
        debug_unredacted_impl_generics,
        debug_unredacted_ty_generics,
        debug_unredacted_where_clause,
    ) = debug_unredacted_generics.split_for_impl();
    let debug_impl = if skip_debug {
        quote! {}
    } else {
        quote! {
            #[cfg(any(test, feature = "testing"))]
            impl #debug_unredacted_impl_generics ::core::fmt::Debug for #ident #debug_unredacted_ty_generics #debug_unredacted_where_clause {
                fn fmt(&self, __f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_unredacted_body
                }
            }

            #[cfg(not(any(test, feature = "testing")))]
            #[allow(unused_variables)]
            impl #debug_redacted_impl_generics ::core::fmt::Debug for #ident #debug_redacted_ty_generics #debug_redacted_where_clause {
                fn fmt(&self, __f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_redacted_body
                }
            }
        }
    };

    // Only generate slog impl when the slog feature is enabled on sanitizer-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        let mut slog_generics = generics.clone();
        let slog_where_clause = slog_generics.make_where_clause();
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: ::core::clone::Clone));
        // IntoSanitizedJson requires Self: Serialize; generic types get the
        // impl whenever their parameters serialize.
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: ::serde::Serialize));
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: #crate_root::slog::IntoSanitizedJson));
        let (slog_impl_generics, slog_ty_generics, slog_where_clause) =
            slog_generics.split_for_impl();
        quote! {
            impl #slog_impl_generics #slog_crate::Value for #ident #slog_ty_generics #slog_where_clause {
                fn serialize(
                    &self,
                    _record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let sanitized = #crate_root::slog::IntoSanitizedJson::into_sanitized_json(self.clone());
                    #slog_crate::Value::serialize(&sanitized, _record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    Ok(quote! {
        impl #impl_generics #crate_root::Sanitize for #ident #ty_generics #where_clause {
            const KIND: #crate_root::TypeKind = #kind;

            const FIELDS: &'static [#crate_root::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            #is_absent_fn

            #visit_fn
        }

        #debug_impl

        #slog_impl

        // `slog` already provides `impl<V: Value> Value for &V`, so a reference
        // impl here would conflict with the blanket impl.
    })
}
