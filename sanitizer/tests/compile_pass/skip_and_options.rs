use std::fmt;

use sanitizer::{Sanitizable, Sanitize, REDACTED};

mod foreign {
    pub struct Handle(pub u32);
}

#[derive(Sanitize)]
#[sanitizer(skip_debug)]
struct Connection {
    #[sensitive]
    password: String,
    #[sanitizer(skip)]
    handle: foreign::Handle,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

#[derive(Default, PartialEq, Sanitize)]
#[sanitizer(skip_default, skip_debug)]
struct Settings {
    #[sensitive]
    token: String,
}

#[derive(Sanitize)]
struct Tuple(#[sanitizer(skip)] foreign::Handle, #[sensitive] String);

/// Field names that also appear in generated code.
#[derive(Sanitize)]
struct Collisions {
    #[sensitive]
    visitor: String,
    f: String,
    debug: String,
    r#type: String,
}

fn main() {
    let mut connection = Connection {
        password: "pw".into(),
        handle: foreign::Handle(3),
    };
    connection.sanitize();
    assert_eq!(connection.password, REDACTED);
    assert_eq!(connection.handle.0, 3);
    let _ = format!("{connection:?}");

    let _ = Settings::default().sanitized();

    let tuple = Tuple(foreign::Handle(1), "x".into()).sanitized();
    assert_eq!(tuple.1, REDACTED);

    let collisions = Collisions {
        visitor: "v".into(),
        f: "f".into(),
        debug: "d".into(),
        r#type: "t".into(),
    }
    .sanitized();
    assert_eq!(collisions.visitor, REDACTED);
    let _ = format!("{collisions:?}");
}
