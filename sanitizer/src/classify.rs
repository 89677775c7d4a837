//! Leaf or composite: how the walk decides whether to descend into a type.
//!
//! Classification is a closed list. The types below are leaves; `Option<T>`
//! and `Box<T>` take the kind of `T`; types deriving `Sanitize` are composite
//! unless they are field-less enums. There is no runtime type query: the kind
//! is an associated constant.

use std::{
    borrow::Cow,
    marker::PhantomData,
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

use crate::{
    engine::{FieldVisitor, Sanitize},
    REDACTED,
};

/// How the walk treats values of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Atomic for the walk: never descended into.
    Leaf,
    /// Has fields of its own that the walk visits.
    Composite,
}

impl TypeKind {
    /// Returns `true` for [`TypeKind::Leaf`].
    pub const fn is_leaf(self) -> bool {
        matches!(self, TypeKind::Leaf)
    }

    /// Returns `true` for [`TypeKind::Composite`].
    pub const fn is_composite(self) -> bool {
        matches!(self, TypeKind::Composite)
    }
}

/// Classifies `T`.
pub const fn classify<T>() -> TypeKind
where
    T: Sanitize + ?Sized,
{
    T::KIND
}

// =============================================================================
// Leaf identities
// =============================================================================

macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sanitize for $ty {
                const KIND: TypeKind = TypeKind::Leaf;
            }
        )*
    };
}

macro_rules! impl_text_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sanitize for $ty {
                const KIND: TypeKind = TypeKind::Leaf;

                fn redacted_text() -> Option<Self> {
                    Some(REDACTED.into())
                }
            }
        )*
    };
}

impl_leaf!(bool, char, (), f32, f64);
impl_leaf!(i8, i16, i32, i64, i128, isize);
impl_leaf!(u8, u16, u32, u64, u128, usize);
impl_leaf!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);
impl_leaf!(Duration, Instant, SystemTime);
impl_text_leaf!(String, Box<str>, Rc<str>, Arc<str>);

impl Sanitize for &str {
    const KIND: TypeKind = TypeKind::Leaf;

    fn redacted_text() -> Option<Self> {
        Some(REDACTED)
    }
}

impl Sanitize for Cow<'_, str> {
    const KIND: TypeKind = TypeKind::Leaf;

    fn redacted_text() -> Option<Self> {
        Some(Cow::Borrowed(REDACTED))
    }
}

impl<T: ?Sized> Sanitize for PhantomData<T> {
    const KIND: TypeKind = TypeKind::Leaf;
}

#[cfg(feature = "chrono")]
mod chrono_leaves {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

    use super::{Sanitize, TypeKind};

    impl_leaf!(NaiveDate, NaiveTime, NaiveDateTime, TimeDelta);

    impl<Tz: TimeZone> Sanitize for DateTime<Tz> {
        const KIND: TypeKind = TypeKind::Leaf;
    }
}

#[cfg(feature = "uuid")]
impl_leaf!(uuid::Uuid);

#[cfg(feature = "rust_decimal")]
impl_leaf!(rust_decimal::Decimal);

// =============================================================================
// Optional wrappers
// =============================================================================

impl<T> Sanitize for Option<T>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn redacted_text() -> Option<Self> {
        T::redacted_text().map(Some)
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Sanitize::is_absent)
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        if let Some(value) = self {
            value.visit_fields(visitor);
        }
    }
}

impl<T> Sanitize for Box<T>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn redacted_text() -> Option<Self> {
        T::redacted_text().map(Box::new)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        (**self).visit_fields(visitor);
    }
}
