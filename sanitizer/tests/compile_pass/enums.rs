use sanitizer::{classify, Sanitizable, Sanitize, TypeKind};

#[derive(Sanitize)]
enum Never {}

#[derive(Clone, Copy, Sanitize)]
enum Status {
    Active = 1,
    Disabled = 2,
}

#[derive(Sanitize)]
enum Message<T> {
    Empty,
    Text {
        #[sensitive]
        body: String,
        status: Status,
    },
    Payload(T),
}

#[derive(Default, Sanitize)]
struct Body {
    #[sensitive]
    secret: String,
}

fn main() {
    assert_eq!(classify::<Never>(), TypeKind::Leaf);
    assert_eq!(classify::<Status>(), TypeKind::Leaf);
    assert_eq!(classify::<Message<Body>>(), TypeKind::Composite);

    let mut message = Message::Payload(Body {
        secret: "s".into(),
    });
    message.sanitize();

    let _ = Message::<Body>::Empty.sanitized();
    let _ = format!("{:?}", Status::Active);
}
