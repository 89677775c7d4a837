//! The depth-bounded graph walk.
//!
//! One pass visits the fields of a single value. Sensitive fields are
//! replaced, leaf fields are left alone, and composite fields start a new pass
//! one level deeper. The depth budget is the only thing that stops the walk:
//! there is no visited-set, so a node reachable along several paths is walked
//! once per path.

use crate::{
    classify::classify,
    descriptor::{is_sensitive, FieldDescriptor},
    engine::traits::{FieldVisitor, Sanitize},
};

/// Default number of composite levels below the root that are sanitized.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Options for a sanitization run.
///
/// `max_depth` counts passes: the root's own fields are pass 1, the fields of
/// its composite children pass 2, and so on. A depth of `0` sanitizes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SanitizeOptions {
    max_depth: usize,
}

impl SanitizeOptions {
    /// Options with [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configured maximum depth.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Redacts every sensitive field reachable from `value` within
/// `options.max_depth()` levels, in place.
///
/// The caller keeps ownership of `value`; nothing is returned. Serialize the
/// value afterwards, never before.
///
/// For each field of the current value:
///
/// 1. a `#[sensitive]` field is replaced by its [`crate::RedactionMarker`],
///    whether its type is a leaf or a composite;
/// 2. a leaf field is left unchanged;
/// 3. an absent composite field is skipped, any other composite field is
///    sanitized with one less level of depth.
///
/// An absent `value` or a depth of `0` is a no-op.
///
/// "Absent" means [`Sanitize::is_absent`]: `None`, an empty collection or a
/// dropped `Weak`. A composite that merely equals its `Default` value is still
/// walked, unless its type opts in with `#[sanitizer(skip_default)]`.
pub fn sanitize<T>(value: &mut T, options: &SanitizeOptions)
where
    T: Sanitize + ?Sized,
{
    sanitize_at(value, options.max_depth);
}

fn sanitize_at<T>(value: &mut T, remaining: usize)
where
    T: Sanitize + ?Sized,
{
    if remaining == 0 || value.is_absent() {
        return;
    }
    value.visit_fields(&mut FieldPass { remaining });
}

/// Visits the fields of one value with `remaining` levels of budget, this
/// level included.
struct FieldPass {
    remaining: usize,
}

impl FieldVisitor for FieldPass {
    fn visit_field<T: Sanitize>(
        &mut self,
        field: &FieldDescriptor,
        value: &mut T,
        marker: Option<fn() -> T>,
    ) {
        if is_sensitive(field) {
            if let Some(marker) = marker {
                *value = marker();
            }
            return;
        }
        if classify::<T>().is_leaf() || value.is_absent() {
            return;
        }
        sanitize_at(value, self.remaining - 1);
    }
}
