use sanitizer::{classify, Sanitizable, Sanitize, TypeKind, REDACTED};

#[derive(Clone, Default, Sanitize)]
struct Node {
    name: String,
    #[sensitive]
    secret: String,
    children: Vec<Node>,
    next: Option<Box<Node>>,
}

#[derive(Sanitize)]
enum Expr {
    Literal(i64),
    Secret(#[sensitive] String),
    Add(Box<Expr>, Box<Expr>),
}

fn main() {
    assert_eq!(classify::<Node>(), TypeKind::Composite);
    assert_eq!(classify::<Expr>(), TypeKind::Composite);

    let node = Node {
        name: "root".into(),
        secret: "s".into(),
        children: vec![Node::default()],
        next: Some(Box::new(Node::default())),
    }
    .sanitized();
    assert_eq!(node.secret, REDACTED);

    let mut expr = Expr::Add(
        Box::new(Expr::Literal(1)),
        Box::new(Expr::Secret("k".into())),
    );
    expr.sanitize();
}
