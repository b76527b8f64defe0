mod common;

use std::sync::{Arc, Mutex};

use common::*;
use jswalk::{DebugVisitor, WalkError, walk};
use jswalk_ast::{AstArena, ExtensionNode, Span};
use tracing_subscriber::prelude::*;

fn debug_output(source: Option<&str>) -> String {
    let arena = AstArena::new();
    let tree = if_else_return(&arena);
    let mut visitor = DebugVisitor::new(Vec::new());
    if let Some(source) = source {
        visitor = visitor.with_source(source);
    }

    walk(Some(&mut visitor), Some(tree)).unwrap();

    String::from_utf8(visitor.finish().unwrap()).unwrap()
}

#[test]
fn test_prints_tree_with_source_excerpts() {
    let output = debug_output(Some(IF_ELSE_RETURN_SOURCE));

    insta::assert_snapshot!(output.trim_end(), @r"
    enter IfStatement 0..43 `if (a > 0) { return a; } else { ...`
      enter BinaryExpression 4..9 `a > 0`
        enter Identifier 4..5 `a`
        exit Identifier 4..5 `a`
        enter NumberLiteral 8..9 `0`
        exit NumberLiteral 8..9 `0`
      exit BinaryExpression 4..9 `a > 0`
      enter BlockStatement 11..24 `{ return a; }`
        enter ReturnStatement 13..22 `return a;`
          enter Identifier 20..21 `a`
          exit Identifier 20..21 `a`
        exit ReturnStatement 13..22 `return a;`
      exit BlockStatement 11..24 `{ return a; }`
      enter BlockStatement 30..43 `{ return 0; }`
        enter ReturnStatement 32..41 `return 0;`
          enter NumberLiteral 39..40 `0`
          exit NumberLiteral 39..40 `0`
        exit ReturnStatement 32..41 `return 0;`
      exit BlockStatement 30..43 `{ return 0; }`
    exit IfStatement 0..43 `if (a > 0) { return a; } else { ...`
    ");
}

#[test]
fn test_prints_spans_only_without_source() {
    let output = debug_output(None);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "enter IfStatement 0..43");
    assert_eq!(lines[2], "    enter Identifier 4..5");
    assert_eq!(lines[19], "exit IfStatement 0..43");
    assert!(!output.contains('`'));
}

#[test]
fn test_span_outside_source_prints_without_excerpt() {
    let output = debug_output(Some("if (a)"));

    assert!(output.starts_with("enter IfStatement 0..43\n"));
    assert!(output.contains("    enter Identifier 4..5 `a`\n"));
}

/// Counts warnings whose message contains a fixed string.
struct WarnCounter {
    needle: &'static str,
    count: Arc<Mutex<usize>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if *event.metadata().level() != tracing::Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        if visitor.0.contains(self.needle) {
            *self.count.lock().unwrap() += 1;
        }
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            use std::fmt::Write;
            let _ = write!(self.0, "{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

#[test]
fn test_unknown_node_kind_is_logged_once() {
    let count = Arc::new(Mutex::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter {
        needle: "cannot determine children",
        count: count.clone(),
    });

    let arena = AstArena::new();
    let unknown = arena.alloc_node(ExtensionNode {
        span: Span::new(0, 5),
        type_name: "JSXFragment",
    });
    let tree = program(&arena, &[expr_stmt(&arena, unknown)]);
    let mut visitor = DebugVisitor::new(Vec::new());

    let result = tracing::subscriber::with_default(subscriber, || {
        walk(Some(&mut visitor), Some(tree))
    });

    assert_eq!(
        result,
        Err(WalkError::unknown_node_kind("JSXFragment", Span::new(0, 5)))
    );
    assert_eq!(*count.lock().unwrap(), 1);

    let output = String::from_utf8(visitor.finish().unwrap()).unwrap();
    assert_eq!(output.lines().last(), Some("exit Program 0..0"));
}
