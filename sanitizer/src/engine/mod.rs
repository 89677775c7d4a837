//! Field enumeration, traversal, and entrypoints.
//!
//! This module ties the pieces together:
//!
//! - **`traits`**: what a traversable type exposes (`Sanitize`, `FieldVisitor`,
//!   `RedactionMarker`) and the user-facing `Sanitizable` methods
//! - **`walk`**: the depth-bounded graph walk (`sanitize`, `SanitizeOptions`)
//! - **`containers`**: `Sanitize` for std collections and shared cells
//!
//! Leaf classification lives in `crate::classify`; field declarations and the
//! sensitivity resolver live in `crate::descriptor`.

mod containers;
mod traits;
mod walk;

pub use traits::{FieldVisitor, RedactionMarker, Sanitizable, Sanitize};
pub use walk::{sanitize, SanitizeOptions, DEFAULT_MAX_DEPTH};
