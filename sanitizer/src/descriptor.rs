//! Field declarations and the sensitivity resolver.
//!
//! A [`FieldDescriptor`] is static data about one declared field. The derive
//! macro emits one descriptor per enumerated field as a `const`, so the
//! sensitivity of a field is decided once, at compile time, from its
//! declaration. Nothing here ever looks at a field's runtime value.

/// Static description of a named, typed field slot on a composite type.
///
/// Tuple fields are named by their position (`"0"`, `"1"`, ...). Fields that
/// belong to an enum variant carry the variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    variant: Option<&'static str>,
    type_name: &'static str,
    sensitive: bool,
}

impl FieldDescriptor {
    /// Describes a struct field.
    #[must_use]
    pub const fn new(name: &'static str, type_name: &'static str, sensitive: bool) -> Self {
        Self {
            name,
            variant: None,
            type_name,
            sensitive,
        }
    }

    /// Attaches the enum variant this field is declared in.
    #[must_use]
    pub const fn in_variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Field name as declared.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Enum variant that declares this field, if any.
    pub const fn variant(&self) -> Option<&'static str> {
        self.variant
    }

    /// Declared type, as written in the source.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Returns `true` iff the field's declaration carries the `#[sensitive]` marking.
///
/// The answer depends only on the declaration. Two instances of the same type
/// always agree, whatever their contents.
pub const fn is_sensitive(field: &FieldDescriptor) -> bool {
    field.sensitive
}
