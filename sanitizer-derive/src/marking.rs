//! Parsing of field markings.
//!
//! A field carries at most one marking. This module maps attribute syntax to
//! that marking and produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// How the walk treats a field, decided from its attributes.
///
/// | Attribute | Marking | Behavior |
/// |-----------|---------|----------|
/// | None | `Plain` | Leaf: unchanged. Composite: recursed into |
/// | `#[sensitive]` | `Sensitive` | Replaced by the redaction marker |
/// | `#[sanitizer(skip)]` | `Skip` | Never enumerated |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Marking {
    /// No annotation.
    Plain,
    /// Bare `#[sensitive]`.
    Sensitive,
    /// `#[sanitizer(skip)]`: the field is opaque to the walk, so its type
    /// needs no `Sanitize` impl.
    Skip,
}

impl Marking {
    pub(crate) fn is_sensitive(self) -> bool {
        matches!(self, Marking::Sensitive)
    }
}

fn set_marking(target: &mut Option<Marking>, next: Marking, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple markings specified on the same field; use one of #[sensitive] or #[sanitizer(skip)]",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_marking(attrs: &[Attribute]) -> Result<Marking> {
    let mut marking: Option<Marking> = None;
    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            match &attr.meta {
                Meta::Path(_) => {
                    set_marking(&mut marking, Marking::Sensitive, attr.span())?;
                }
                Meta::List(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "#[sensitive] takes no arguments: a field is either sensitive or not",
                    ));
                }
                Meta::NameValue(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "name-value syntax is not supported for #[sensitive]",
                    ));
                }
            }
        } else if attr.path().is_ident("sanitizer") {
            let Meta::List(list) = &attr.meta else {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected a field option (e.g., #[sanitizer(skip)])",
                ));
            };
            list.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    set_marking(&mut marking, Marking::Skip, meta.path.span())
                } else {
                    Err(meta.error(format!(
                        "unknown field option `{}`; expected `skip`",
                        meta.path
                            .get_ident()
                            .map_or_else(|| "?".to_string(), ToString::to_string)
                    )))
                }
            })?;
        }
    }

    Ok(marking.unwrap_or(Marking::Plain))
}
