#![allow(dead_code)]

use jswalk::Visitor;
use jswalk_ast::{
    AstArena, BinaryExpression, BlockStatement, ExpressionStatement, ForStatement, Identifier,
    IfStatement, Node, NodeKind, NumberLiteral, Program, ReturnStatement, Span, UnaryExpression,
};

pub const NO_SPAN: Span = Span::new(0, 0);

/// One visitor callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Enter(String),
    Exit(String),
}

/// Short label for a node: the kind, plus the name/literal/operator of leaves
/// and operators.
pub fn label(node: Node<'_>) -> String {
    match node {
        Node::Identifier(ident) => format!("Identifier({})", ident.name),
        Node::NumberLiteral(lit) => format!("NumberLiteral({})", lit.literal),
        Node::StringLiteral(lit) => format!("StringLiteral({})", lit.literal),
        Node::BinaryExpression(expr) => format!("BinaryExpression({})", expr.operator),
        Node::UnaryExpression(expr) => format!("UnaryExpression({})", expr.operator),
        Node::TemplateElement(elem) => format!("TemplateElement({})", elem.literal),
        other => other.kind().to_string(),
    }
}

/// Records every enter and exit call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn entered(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Enter(label) => Some(label.as_str()),
                Event::Exit(_) => None,
            })
            .collect()
    }

    pub fn exited(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Exit(label) => Some(label.as_str()),
                Event::Enter(_) => None,
            })
            .collect()
    }

    /// Names of the identifiers entered, in order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.entered()
            .into_iter()
            .filter_map(|label| {
                label
                    .strip_prefix("Identifier(")
                    .and_then(|rest| rest.strip_suffix(')'))
            })
            .collect()
    }
}

impl<'a> Visitor<'a> for Recorder {
    fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>> {
        self.events.push(Event::Enter(label(node)));
        Some(self)
    }

    fn exit(&mut self, node: Node<'a>) {
        self.events.push(Event::Exit(label(node)));
    }
}

/// Panics unless every exit matches the innermost open enter.
pub fn assert_well_nested(events: &[Event]) {
    let mut open: Vec<&str> = Vec::new();
    for event in events {
        match event {
            Event::Enter(label) => open.push(label),
            Event::Exit(label) => {
                let top = open.pop();
                assert_eq!(top, Some(label.as_str()), "unbalanced exit in {events:?}");
            }
        }
    }
    assert!(open.is_empty(), "nodes never exited: {open:?}");
}

pub fn ident<'a>(arena: &'a AstArena, name: &'a str) -> Node<'a> {
    arena.alloc_node(Identifier {
        span: NO_SPAN,
        name,
    })
}

pub fn number<'a>(arena: &'a AstArena, literal: &'a str) -> Node<'a> {
    arena.alloc_node(NumberLiteral {
        span: NO_SPAN,
        literal,
        value: literal.parse().unwrap_or(f64::NAN),
    })
}

pub fn binary<'a>(
    arena: &'a AstArena,
    operator: &'a str,
    left: Node<'a>,
    right: Node<'a>,
) -> Node<'a> {
    arena.alloc_node(BinaryExpression {
        span: NO_SPAN,
        operator,
        left,
        right,
    })
}

pub fn block<'a>(arena: &'a AstArena, list: &[Node<'a>]) -> Node<'a> {
    arena.alloc_node(BlockStatement {
        span: NO_SPAN,
        list: arena.alloc_nodes(list),
    })
}

pub fn expr_stmt<'a>(arena: &'a AstArena, expression: Node<'a>) -> Node<'a> {
    arena.alloc_node(ExpressionStatement {
        span: NO_SPAN,
        expression,
    })
}

pub fn program<'a>(arena: &'a AstArena, body: &[Node<'a>]) -> Node<'a> {
    arena.alloc_node(Program {
        span: NO_SPAN,
        body: arena.alloc_nodes(body),
    })
}

/// `if (a > 0) { return a; } else { return 0; }`, with real spans.
pub fn if_else_return(arena: &AstArena) -> Node<'_> {
    let a = arena.alloc_node(Identifier {
        span: Span::new(4, 5),
        name: "a",
    });
    let zero = arena.alloc_node(NumberLiteral {
        span: Span::new(8, 9),
        literal: "0",
        value: 0.0,
    });
    let test = arena.alloc_node(BinaryExpression {
        span: Span::new(4, 9),
        operator: ">",
        left: a,
        right: zero,
    });

    let returned_a = arena.alloc_node(Identifier {
        span: Span::new(20, 21),
        name: "a",
    });
    let return_a = arena.alloc_node(ReturnStatement {
        span: Span::new(13, 22),
        argument: Some(returned_a),
    });
    let consequent = arena.alloc_node(BlockStatement {
        span: Span::new(11, 24),
        list: arena.alloc_nodes(&[return_a]),
    });

    let returned_zero = arena.alloc_node(NumberLiteral {
        span: Span::new(39, 40),
        literal: "0",
        value: 0.0,
    });
    let return_zero = arena.alloc_node(ReturnStatement {
        span: Span::new(32, 41),
        argument: Some(returned_zero),
    });
    let alternate = arena.alloc_node(BlockStatement {
        span: Span::new(30, 43),
        list: arena.alloc_nodes(&[return_zero]),
    });

    arena.alloc_node(IfStatement {
        span: Span::new(0, 43),
        test,
        consequent,
        alternate: Some(alternate),
    })
}

pub const IF_ELSE_RETURN_SOURCE: &str = "if (a > 0) { return a; } else { return 0; }";

/// `for (; i < 10; i++) {}`
pub fn for_without_initializer(arena: &AstArena) -> Node<'_> {
    let test = binary(arena, "<", ident(arena, "i"), number(arena, "10"));
    let update = arena.alloc_node(UnaryExpression {
        span: NO_SPAN,
        operator: "++",
        postfix: true,
        operand: ident(arena, "i"),
    });
    arena.alloc_node(ForStatement {
        span: NO_SPAN,
        initializer: None,
        test: Some(test),
        update: Some(update),
        body: block(arena, &[]),
    })
}

/// Returns the kind of every node in `events` that was entered.
pub fn entered_kinds(events: &[Event]) -> Vec<NodeKind> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Enter(label) => {
                let name = label.split('(').next().unwrap_or(label);
                NodeKind::ALL.iter().copied().find(|kind| kind.as_str() == name)
            }
            Event::Exit(_) => None,
        })
        .collect()
}
