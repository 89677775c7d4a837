//! Container-level attribute parsing for `#[derive(Sanitize)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Options parsed from container-level `#[sanitizer(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// If true, skip generating the `Debug` impl.
    pub(crate) skip_debug: bool,
    /// If true, a value equal to `Default::default()` counts as absent and
    /// is not descended into.
    pub(crate) skip_default: bool,
}

/// Parses container-level `#[sanitizer(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            return Err(syn::Error::new(
                attr.span(),
                "#[sensitive] marks fields, not types; put it on the field that holds this type",
            ));
        }
        if !attr.path().is_ident("sanitizer") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[sanitizer] on container - no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip_debug") {
                        options.skip_debug = true;
                        Ok(())
                    } else if meta.path.is_ident("skip_default") {
                        options.skip_default = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `skip_debug` or `skip_default`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[sanitizer]",
                ));
            }
        }
    }

    Ok(options)
}
