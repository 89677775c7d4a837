//! End-to-end tests for the public sanitization API.
//!
//! These tests exercise the integration of:
//! - `Sanitize` derive field enumeration,
//! - leaf/composite classification, and
//! - the depth-bounded in-place walk.

use std::{collections::HashMap, marker::PhantomData};

use sanitizer::{
    classify, sanitize, FieldDescriptor, Sanitizable, Sanitize, SanitizeOptions, TypeKind,
    DEFAULT_MAX_DEPTH, REDACTED,
};

fn depth(max_depth: usize) -> SanitizeOptions {
    SanitizeOptions::new().with_max_depth(max_depth)
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[derive(Clone, Default, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Child {
    #[sensitive]
    sensitive: String,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Root {
    not_sensitive: String,
    #[sensitive]
    sensitive: String,
    child: Child,
}

fn root() -> Root {
    Root {
        not_sensitive: "A".into(),
        sensitive: "B".into(),
        child: Child {
            sensitive: "C".into(),
        },
    }
}

#[test]
fn test_root_and_child_are_redacted() {
    let mut value = root();
    sanitize(&mut value, &depth(3));

    assert_eq!(value.not_sensitive, "A");
    assert_eq!(value.sensitive, REDACTED);
    assert_eq!(value.child.sensitive, REDACTED);
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct L3 {
    #[sensitive]
    secret: String,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct L2 {
    #[sensitive]
    secret: String,
    next: L3,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct L1 {
    #[sensitive]
    secret: String,
    next: L2,
}

fn chain() -> L1 {
    L1 {
        secret: "one".into(),
        next: L2 {
            secret: "two".into(),
            next: L3 {
                secret: "three".into(),
            },
        },
    }
}

#[test]
fn test_depth_two_stops_before_third_level() {
    let mut value = chain();
    sanitize(&mut value, &depth(2));

    assert_eq!(value.secret, REDACTED);
    assert_eq!(value.next.secret, REDACTED);
    assert_eq!(value.next.next.secret, "three");
}

#[test]
fn test_depth_three_reaches_third_level() {
    let mut value = chain();
    sanitize(&mut value, &depth(3));

    assert_eq!(value.next.next.secret, REDACTED);
}

#[test]
fn test_depth_zero_mutates_nothing() {
    let mut value = root();
    sanitize(&mut value, &depth(0));

    assert!(value == root());
    assert_eq!(value.sensitive, "B");
}

#[test]
fn test_absent_root_is_a_no_op() {
    let mut value: Option<Root> = None;
    value.sanitize();
    assert!(value.is_none());

    let mut present = Some(root());
    present.sanitize();
    assert_eq!(present.unwrap().sensitive, REDACTED);
}

// ============================================================================
// Redaction markers
// ============================================================================

#[derive(Clone, Default, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Profile {
    #[sensitive]
    email: String,
    #[sensitive]
    age: u8,
    #[sensitive]
    verified: bool,
    #[sensitive]
    initial: char,
    #[sensitive]
    score: f64,
    #[sensitive]
    nickname: Option<String>,
    #[sensitive]
    pin: Option<u32>,
    #[sensitive]
    backup_codes: Vec<String>,
    #[sensitive]
    motto: Box<str>,
    display_name: String,
}

fn profile() -> Profile {
    Profile {
        email: "alice@example.com".into(),
        age: 42,
        verified: true,
        initial: 'A',
        score: 9.5,
        nickname: Some("ally".into()),
        pin: Some(1234),
        backup_codes: vec!["111".into(), "222".into()],
        motto: "carpe diem".into(),
        display_name: "Alice".into(),
    }
}

#[test]
fn test_text_fields_become_the_sentinel() {
    let value = profile().sanitized();

    assert_eq!(value.email, REDACTED);
    assert_eq!(value.nickname.as_deref(), Some(REDACTED));
    assert_eq!(&*value.motto, REDACTED);
}

#[test]
fn test_non_text_fields_become_their_default() {
    let value = profile().sanitized();

    assert_eq!(value.age, 0);
    assert!(!value.verified);
    assert_eq!(value.initial, '\0');
    assert!(value.score.abs() < f64::EPSILON);
    assert_eq!(value.pin, None);
    assert!(value.backup_codes.is_empty());
}

#[test]
fn test_non_sensitive_leaves_are_never_mutated() {
    let value = profile().sanitized();
    assert_eq!(value.display_name, "Alice");
}

#[test]
fn test_sensitive_absent_text_is_replaced_too() {
    let mut value = profile();
    value.nickname = None;
    value.sanitize();
    assert_eq!(value.nickname.as_deref(), Some(REDACTED));
}

// ============================================================================
// Composite fields
// ============================================================================

#[derive(Clone, Default, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Card {
    number: String,
    holder: String,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Payment {
    #[sensitive]
    card: Card,
    amount: u64,
}

#[test]
fn test_sensitive_composite_is_replaced_wholesale() {
    let mut value = Payment {
        card: Card {
            number: "4111111111111111".into(),
            holder: "Alice".into(),
        },
        amount: 100,
    };
    value.sanitize();

    assert!(value.card == Card::default());
    assert_eq!(value.card.number, "");
    assert_eq!(value.amount, 100);
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Account {
    owner: String,
    primary: Option<Child>,
    history: Vec<Child>,
    by_label: HashMap<String, Child>,
    boxed: Box<Child>,
}

fn child(secret: &str) -> Child {
    Child {
        sensitive: secret.into(),
    }
}

#[test]
fn test_wrapped_composites_are_unwrapped_and_recursed() {
    let mut value = Account {
        owner: "alice".into(),
        primary: Some(child("p")),
        history: vec![child("h1"), child("h2")],
        by_label: HashMap::from([("work".to_string(), child("w"))]),
        boxed: Box::new(child("b")),
    };
    value.sanitize();

    assert_eq!(value.owner, "alice");
    assert_eq!(value.primary.unwrap().sensitive, REDACTED);
    assert!(value.history.iter().all(|c| c.sensitive == REDACTED));
    assert_eq!(value.by_label["work"].sensitive, REDACTED);
    assert_eq!(value.boxed.sensitive, REDACTED);
}

#[test]
fn test_collection_elements_share_the_collection_depth() {
    // Depth 1 covers only the root's own fields: the children inside the
    // vector sit one level below.
    let mut value = Account {
        owner: "alice".into(),
        primary: None,
        history: vec![child("h1")],
        by_label: HashMap::new(),
        boxed: Box::new(child("b")),
    };
    sanitize(&mut value, &depth(1));
    assert_eq!(value.history[0].sensitive, "h1");

    sanitize(&mut value, &depth(2));
    assert_eq!(value.history[0].sensitive, REDACTED);
}

// ============================================================================
// Idempotence and copies
// ============================================================================

#[test]
fn test_sanitizing_twice_changes_nothing_more() {
    let once = chain().sanitized();
    let twice = once.clone().sanitized();
    assert!(once == twice);

    let once = profile().sanitized();
    let twice = once.clone().sanitized();
    assert!(once == twice);
}

#[test]
fn test_sanitized_copy_keeps_the_original() {
    let original = root();
    let copy = original.sanitized_copy(&SanitizeOptions::default());

    assert_eq!(original.sensitive, "B");
    assert_eq!(copy.sensitive, REDACTED);
    assert_eq!(copy.child.sensitive, REDACTED);
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
enum Status {
    Active,
    Suspended,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
enum Credential {
    Anonymous,
    Password {
        user: String,
        #[sensitive]
        password: String,
    },
    Token(#[sensitive] String, Status),
    Delegated(Box<Credential>),
}

#[test]
fn test_field_less_enums_are_leaves() {
    assert_eq!(classify::<Status>(), TypeKind::Leaf);
    assert_eq!(classify::<Option<Status>>(), TypeKind::Leaf);
    assert_eq!(classify::<Credential>(), TypeKind::Composite);
}

#[test]
fn test_only_the_active_variant_is_visited() {
    let value = Credential::Password {
        user: "alice".into(),
        password: "hunter2".into(),
    }
    .sanitized();
    let Credential::Password { user, password } = value else {
        panic!("variant changed");
    };
    assert_eq!(user, "alice");
    assert_eq!(password, REDACTED);

    let value = Credential::Token("abc".into(), Status::Suspended).sanitized();
    assert!(value == Credential::Token(REDACTED.into(), Status::Suspended));

    let value = Credential::Anonymous.sanitized();
    assert!(value == Credential::Anonymous);
}

#[test]
fn test_nested_variants_are_recursed() {
    let value = Credential::Delegated(Box::new(Credential::Token(
        "abc".into(),
        Status::Active,
    )))
    .sanitized();
    assert!(
        value
            == Credential::Delegated(Box::new(Credential::Token(
                REDACTED.into(),
                Status::Active
            )))
    );
}

// ============================================================================
// Tuple structs, generics, skipped fields
// ============================================================================

#[derive(Clone, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct ApiKey(#[sensitive] String, u32);

#[test]
fn test_tuple_struct_fields_are_positional() {
    let value = ApiKey("sk-123".into(), 7).sanitized();
    assert_eq!(value.0, REDACTED);
    assert_eq!(value.1, 7);
    assert_eq!(ApiKey::FIELDS[0].name(), "0");
}

#[derive(Clone, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Envelope<T, M> {
    id: String,
    payload: T,
    #[sensitive]
    signature: T,
    #[cfg_attr(feature = "slog", serde(skip))]
    _marker: PhantomData<M>,
}

/// Implements neither `Sanitize` nor `Default`.
#[derive(Clone)]
struct ForeignTag;

#[test]
fn test_generic_fields_follow_their_type_argument() {
    let value = Envelope::<Child, ForeignTag> {
        id: "env-1".into(),
        payload: child("inner"),
        signature: child("sig"),
        _marker: PhantomData,
    }
    .sanitized();

    assert_eq!(value.id, "env-1");
    assert_eq!(value.payload.sensitive, REDACTED);
    assert_eq!(value.signature.sensitive, "");
}

#[derive(Clone, Sanitize)]
#[sanitizer(skip_debug)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Connection {
    #[sensitive]
    password: String,
    #[sanitizer(skip)]
    #[cfg_attr(feature = "slog", serde(skip))]
    handle: ForeignTag,
    #[sanitizer(skip)]
    note: String,
}

#[test]
fn test_skipped_fields_are_opaque() {
    let value = Connection {
        password: "pw".into(),
        handle: ForeignTag,
        note: "keep me".into(),
    }
    .sanitized();

    assert_eq!(value.password, REDACTED);
    assert_eq!(value.note, "keep me");
    let _handle: ForeignTag = value.handle;
    assert_eq!(Connection::FIELDS.len(), 1);
}

// ============================================================================
// Field descriptors
// ============================================================================

#[test]
fn test_fields_describe_declarations_in_order() {
    let names: Vec<_> = Root::FIELDS.iter().map(FieldDescriptor::name).collect();
    assert_eq!(names, vec!["not_sensitive", "sensitive", "child"]);

    let sensitive: Vec<_> = Root::FIELDS
        .iter()
        .filter(|field| sanitizer::is_sensitive(field))
        .map(FieldDescriptor::name)
        .collect();
    assert_eq!(sensitive, vec!["sensitive"]);

    assert_eq!(Root::FIELDS[2].type_name(), "Child");
    assert_eq!(Root::FIELDS[2].variant(), None);
}

#[test]
fn test_variant_fields_carry_their_variant() {
    let password = Credential::FIELDS
        .iter()
        .find(|field| field.name() == "password")
        .unwrap();
    assert_eq!(password.variant(), Some("Password"));
    assert!(sanitizer::is_sensitive(password));

    let token = &Credential::FIELDS[2];
    assert_eq!(token.name(), "0");
    assert_eq!(token.variant(), Some("Token"));
    assert_eq!(Credential::FIELDS.len(), 5);
}

#[test]
fn test_sensitivity_does_not_depend_on_the_value() {
    let before = Root::FIELDS.to_vec();
    let mut value = root();
    value.sanitize();
    assert_eq!(Root::FIELDS.to_vec(), before);
}

// ============================================================================
// Default-skip
// ============================================================================

#[derive(Clone, Default, PartialEq, Sanitize)]
#[sanitizer(skip_default)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Address {
    street: String,
    #[sensitive]
    postcode: String,
}

#[derive(Clone, PartialEq, Sanitize)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
struct Customer {
    name: String,
    address: Address,
}

#[test]
fn test_default_valued_composites_are_skipped_when_opted_in() {
    let mut value = Customer {
        name: "alice".into(),
        address: Address::default(),
    };
    value.sanitize();
    assert!(value.address == Address::default());

    let mut value = Customer {
        name: "alice".into(),
        address: Address {
            street: "Main St".into(),
            postcode: "12345".into(),
        },
    };
    value.sanitize();
    assert_eq!(value.address.street, "Main St");
    assert_eq!(value.address.postcode, REDACTED);
}

#[test]
fn test_default_valued_composites_are_walked_without_opt_in() {
    let mut value = Root {
        not_sensitive: "A".into(),
        sensitive: "B".into(),
        child: Child::default(),
    };
    value.sanitize();
    assert_eq!(value.child.sensitive, REDACTED);
}

#[test]
fn test_default_options_reach_three_levels() {
    assert_eq!(DEFAULT_MAX_DEPTH, 3);

    let mut value = chain();
    value.sanitize();
    assert_eq!(value.next.next.secret, REDACTED);
}
