use std::{borrow::Cow, collections::HashMap, marker::PhantomData};

use sanitizer::{Sanitizable, Sanitize, REDACTED};

#[derive(Sanitize)]
struct Borrowed<'a> {
    #[sensitive]
    password: &'a str,
    #[sensitive]
    note: Cow<'a, str>,
    user: &'a str,
}

#[derive(Default, Sanitize)]
struct Inner {
    #[sensitive]
    secret: String,
}

#[derive(Sanitize)]
struct Wrapper<T, U, M>
where
    T: Clone,
{
    value: T,
    #[sensitive]
    hidden: Option<U>,
    by_key: HashMap<String, Vec<T>>,
    _marker: PhantomData<M>,
}

struct NotSanitizable;

fn main() {
    let owned = String::from("hunter2");
    let mut borrowed = Borrowed {
        password: &owned,
        note: Cow::Borrowed("private"),
        user: "alice",
    };
    borrowed.sanitize();
    assert_eq!(borrowed.password, REDACTED);
    assert_eq!(borrowed.note, REDACTED);
    assert_eq!(borrowed.user, "alice");

    let mut wrapper: Wrapper<u8, Inner, NotSanitizable> = Wrapper {
        value: 1,
        hidden: Some(Inner {
            secret: "s".into(),
        }),
        by_key: HashMap::new(),
        _marker: PhantomData,
    };
    wrapper.sanitize();
    assert!(wrapper.hidden.is_none());
}
