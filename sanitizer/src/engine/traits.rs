//! Traits for types that can be walked by the sanitizer.
//!
//! - [`Sanitize`]: a type the walk knows how to classify and, for composites,
//!   how to enumerate fields of
//! - [`FieldVisitor`]: receives each enumerated field
//! - [`RedactionMarker`]: the replacement value for a sensitive field
//! - [`Sanitizable`]: user-facing `.sanitize()` methods
//!
//! ## Field Handling
//!
//! The derive macro generates one `visit_field` call per field:
//!
//! | Annotation | Generated call | Behavior |
//! |------------|----------------|----------|
//! | None | `visit_field(.., None)` | Leaf: unchanged. Composite: recursed into |
//! | `#[sensitive]` | `visit_field(.., Some(marker))` | Replaced by its redaction marker |
//! | `#[sanitizer(skip)]` | no call | Opaque, never enumerated |

use crate::{
    classify::TypeKind,
    descriptor::FieldDescriptor,
    engine::walk::{sanitize, SanitizeOptions},
};

// =============================================================================
// Sanitize - Types the walk can classify and traverse
// =============================================================================

/// A type that may appear in a sanitized object graph.
///
/// Leaf types only declare [`Sanitize::KIND`]. Composite types (usually via
/// `#[derive(Sanitize)]`) also list their fields and enumerate them through
/// [`Sanitize::visit_fields`].
///
/// ## Foreign types
///
/// A field whose type comes from another crate and has no `Sanitize` impl
/// can be marked `#[sanitizer(skip)]` to leave it out of the walk. If it must
/// be redacted, wrap it in a local newtype and implement `Sanitize` for that.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Sanitize`",
    label = "this type cannot be walked by the sanitizer",
    note = "use `#[derive(Sanitize)]` on the type definition",
    note = "or mark the field `#[sanitizer(skip)]` to leave it out of the walk"
)]
pub trait Sanitize {
    /// Whether the walk treats this type as atomic or descends into it.
    const KIND: TypeKind;

    /// Every field [`Sanitize::visit_fields`] can report, in declaration order.
    const FIELDS: &'static [FieldDescriptor] = &[];

    /// The sentinel-bearing value for text-like types.
    ///
    /// Returns `None` for every type whose redaction marker is its default.
    #[must_use]
    fn redacted_text() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }

    /// Returns `true` when the value holds nothing to sanitize (`None`, an
    /// empty collection, a dangling weak reference).
    fn is_absent(&self) -> bool {
        false
    }

    /// Reports each field of `self` to `visitor`.
    ///
    /// Leaf types have no fields; the default does nothing.
    #[allow(unused_variables)]
    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {}
}

// =============================================================================
// FieldVisitor - Receives enumerated fields
// =============================================================================

/// Receives each field enumerated by [`Sanitize::visit_fields`].
///
/// `marker` is `Some` exactly for fields declared `#[sensitive]`; the derive
/// guarantees this. Hand-written `Sanitize` impls must uphold the same rule.
pub trait FieldVisitor {
    /// Visits one field slot.
    fn visit_field<T: Sanitize>(
        &mut self,
        field: &FieldDescriptor,
        value: &mut T,
        marker: Option<fn() -> T>,
    );
}

// =============================================================================
// RedactionMarker - Replacement values for sensitive fields
// =============================================================================

/// The value substituted for a sensitive field.
///
/// Text-like types produce [`crate::REDACTED`]. Every other type produces its
/// `Default` value, because no generic "masked" form exists for it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used for a `#[sensitive]` field",
    label = "no redaction marker for this type",
    note = "sensitive fields are replaced by `Default::default()` unless they are text",
    note = "implement `Default` for `{Self}`, or drop `#[sensitive]` and mark its inner fields instead"
)]
pub trait RedactionMarker: Sanitize + Sized {
    /// Returns the replacement value.
    #[must_use]
    fn redaction_marker() -> Self;
}

impl<T> RedactionMarker for T
where
    T: Sanitize + Default,
{
    fn redaction_marker() -> Self {
        T::redacted_text().unwrap_or_default()
    }
}

// =============================================================================
// Sanitizable - User-facing methods
// =============================================================================

/// Public entrypoint for sanitization.
///
/// Blanket-implemented for every [`Sanitize`] type.
///
/// The in-place methods mutate the receiver. Any other handle to the same
/// data (for example a clone of an `Rc<RefCell<_>>` field) observes the
/// redaction too.
pub trait Sanitizable: Sanitize {
    /// Sanitizes in place with [`SanitizeOptions::default`].
    fn sanitize(&mut self) {
        sanitize(self, &SanitizeOptions::default());
    }

    /// Sanitizes in place with explicit options.
    fn sanitize_with(&mut self, options: &SanitizeOptions) {
        sanitize(self, options);
    }

    /// Consumes `self` and returns it sanitized with the default options.
    #[must_use]
    fn sanitized(mut self) -> Self
    where
        Self: Sized,
    {
        self.sanitize();
        self
    }

    /// Returns a sanitized clone, leaving `self` untouched.
    ///
    /// Shared cells (`Rc<RefCell<_>>`) are cloned by handle, so data behind
    /// them is still redacted in place.
    #[must_use]
    fn sanitized_copy(&self, options: &SanitizeOptions) -> Self
    where
        Self: Clone,
    {
        let mut copy = self.clone();
        sanitize(&mut copy, options);
        copy
    }
}

impl<T> Sanitizable for T where T: Sanitize + ?Sized {}
