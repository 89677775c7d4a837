//! `Sanitize` implementations for std collections and shared cells.
//!
//! Collections are transparent: they take the kind of their element, and
//! visiting a collection visits the fields of every element at the same depth
//! as the collection field itself. Map keys are never visited.
//!
//! Set elements are keys too. Rewriting them could merge elements that become
//! equal, so sets are leaves: a set field is either replaced whole when it is
//! `#[sensitive]` or left exactly as it is.
//!
//! Shared cells (`Rc<RefCell<_>>`, `Weak<RefCell<_>>`) are borrowed with
//! `try_borrow_mut`. A cell that is already mutably borrowed further up the
//! current walk is an ancestor on a reference cycle and is not re-entered.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::{Rc, Weak},
};

use crate::{
    classify::TypeKind,
    engine::traits::{FieldVisitor, Sanitize},
};

// =============================================================================
// Sequences
// =============================================================================

impl<T> Sanitize for Vec<T>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        for item in self {
            item.visit_fields(visitor);
        }
    }
}

impl<T> Sanitize for VecDeque<T>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        for item in self {
            item.visit_fields(visitor);
        }
    }
}

impl<T, const N: usize> Sanitize for [T; N]
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        N == 0
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        for item in self {
            item.visit_fields(visitor);
        }
    }
}

// =============================================================================
// Maps (values only)
// =============================================================================

impl<K, V, S> Sanitize for HashMap<K, V, S>
where
    V: Sanitize,
{
    const KIND: TypeKind = V::KIND;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn visit_fields<F: FieldVisitor>(&mut self, visitor: &mut F) {
        for value in self.values_mut() {
            value.visit_fields(visitor);
        }
    }
}

impl<K, V> Sanitize for BTreeMap<K, V>
where
    V: Sanitize,
{
    const KIND: TypeKind = V::KIND;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn visit_fields<F: FieldVisitor>(&mut self, visitor: &mut F) {
        for value in self.values_mut() {
            value.visit_fields(visitor);
        }
    }
}

// =============================================================================
// Sets (elements are keys, never visited)
// =============================================================================

impl<T, S> Sanitize for HashSet<T, S> {
    const KIND: TypeKind = TypeKind::Leaf;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sanitize for BTreeSet<T> {
    const KIND: TypeKind = TypeKind::Leaf;

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Cells
// =============================================================================

impl<T> Sanitize for RefCell<T>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        self.try_borrow().is_ok_and(|value| value.is_absent())
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        self.get_mut().visit_fields(visitor);
    }
}

impl<T> Sanitize for Rc<RefCell<T>>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        self.try_borrow().is_ok_and(|value| value.is_absent())
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        if let Ok(mut value) = self.try_borrow_mut() {
            value.visit_fields(visitor);
        }
    }
}

impl<T> Sanitize for Weak<RefCell<T>>
where
    T: Sanitize,
{
    const KIND: TypeKind = T::KIND;

    fn is_absent(&self) -> bool {
        self.upgrade().map_or(true, |cell| cell.is_absent())
    }

    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) {
        if let Some(mut cell) = self.upgrade() {
            cell.visit_fields(visitor);
        }
    }
}
