//! Depth-bounded, in-place redaction of sensitive fields in typed object graphs.
//!
//! Sanitize a value right before handing it to a serializer. Every field
//! declared `#[sensitive]` is replaced, everything else keeps its shape:
//!
//! - text-like fields become [`REDACTED`]
//! - every other sensitive field becomes its type's `Default` value, including
//!   composite fields, which are replaced wholesale and never descended into
//!
//! This crate separates:
//! - **Classification** ([`classify`]): whether a type is a leaf or a composite.
//! - **Resolution** ([`is_sensitive`]): whether a declared field is sensitive.
//! - **The walk** ([`sanitize`]): visiting fields level by level, up to
//!   [`SanitizeOptions::max_depth`].
//!
//! ```rust
//! use sanitizer::{Sanitizable, Sanitize, REDACTED};
//!
//! #[derive(Sanitize)]
//! # #[cfg_attr(feature = "slog", derive(Clone, serde::Serialize))]
//! struct Child {
//!     #[sensitive]
//!     sensitive: String,
//! }
//!
//! #[derive(Sanitize)]
//! # #[cfg_attr(feature = "slog", derive(Clone, serde::Serialize))]
//! struct Root {
//!     not_sensitive: String,
//!     #[sensitive]
//!     sensitive: String,
//!     child: Child,
//! }
//!
//! let mut root = Root {
//!     not_sensitive: "A".into(),
//!     sensitive: "B".into(),
//!     child: Child { sensitive: "C".into() },
//! };
//! root.sanitize();
//!
//! assert_eq!(root.not_sensitive, "A");
//! assert_eq!(root.sensitive, REDACTED);
//! assert_eq!(root.child.sensitive, REDACTED);
//! ```
//!
//! Sanitization mutates the value it is given. Redaction is one-way: there is
//! no way to recover what was replaced.
//!
//! What this crate does not do:
//! - serialize, log, or perform I/O (the `json` and `slog` features only hand
//!   an already sanitized value to those crates)
//! - detect reference cycles: depth is the only bound on the walk
//!
//! The `Sanitize` derive macro lives in `sanitizer-derive` and is re-exported
//! from this crate.

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
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use sanitizer_derive::Sanitize;

// Lets code generated by the derive name `::sanitizer` from inside this crate.
#[allow(unused_extern_crates)]
extern crate self as sanitizer;

// Module declarations
mod classify;
mod descriptor;
mod engine;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classify::{classify, TypeKind};
pub use descriptor::{is_sensitive, FieldDescriptor};
pub use engine::{
    sanitize, FieldVisitor, RedactionMarker, Sanitizable, SanitizeOptions, DEFAULT_MAX_DEPTH,
};
// The trait shares its name with the derive macro; they live in different namespaces.
pub use engine::Sanitize;
#[cfg(feature = "json")]
pub use json::{to_sanitized_json, to_sanitized_string};

/// Replacement text for sensitive text-like fields.
pub const REDACTED: &str = "***";
