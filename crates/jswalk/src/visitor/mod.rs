//! Visitor protocol and traversal engine.
//!
//! # Overview
//!
//! - [`Visitor`] - Enter/Exit trait implemented by traversal clients
//! - [`walk`] / [`Walker`] - Depth-first traversal over every node kind
//! - [`DebugVisitor`] - Prints every enter and exit, for manual inspection
//!
//! # Examples
//!
//! ## Scoped visitor substitution
//!
//! `enter` may hand the subtree to another visitor. Here every identifier
//! inside a class body is collected separately from the others.
//!
//! ```rust
//! use jswalk::{Visitor, walk};
//! use jswalk_ast::{
//!     AstArena, ClassLiteral, ExpressionStatement, FieldDefinition, Identifier, Node, Program,
//!     Span,
//! };
//!
//! #[derive(Default)]
//! struct Idents<'a>(Vec<&'a str>);
//!
//! impl<'a> Visitor<'a> for Idents<'a> {
//!     fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>> {
//!         if let Node::Identifier(ident) = node {
//!             self.0.push(ident.name);
//!         }
//!         Some(self)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Outer<'a> {
//!     top_level: Idents<'a>,
//!     class_members: Idents<'a>,
//! }
//!
//! impl<'a> Visitor<'a> for Outer<'a> {
//!     fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>> {
//!         match node {
//!             Node::ClassLiteral(_) => Some(&mut self.class_members),
//!             _ => {
//!                 let _ = self.top_level.enter(node);
//!                 Some(self)
//!             }
//!         }
//!     }
//! }
//!
//! let arena = AstArena::new();
//! // `(class { x = y }); z;`
//! let x = arena.alloc_node(Identifier { span: Span::new(9, 10), name: "x" });
//! let y = arena.alloc_node(Identifier { span: Span::new(13, 14), name: "y" });
//! let field = arena.alloc_node(FieldDefinition {
//!     span: Span::new(9, 14),
//!     key: x,
//!     initializer: Some(y),
//!     is_static: false,
//! });
//! let class = arena.alloc_node(ClassLiteral {
//!     span: Span::new(1, 16),
//!     name: None,
//!     super_class: None,
//!     body: arena.alloc_nodes(&[field]),
//! });
//! let z = arena.alloc_node(Identifier { span: Span::new(19, 20), name: "z" });
//! let program = arena.alloc_node(Program {
//!     span: Span::new(0, 21),
//!     body: arena.alloc_nodes(&[
//!         arena.alloc_node(ExpressionStatement { span: Span::new(0, 18), expression: class }),
//!         arena.alloc_node(ExpressionStatement { span: Span::new(19, 21), expression: z }),
//!     ]),
//! });
//!
//! let mut outer = Outer::default();
//! walk(Some(&mut outer), Some(program)).unwrap();
//! assert_eq!(outer.top_level.0, vec!["z"]);
//! assert_eq!(outer.class_members.0, vec!["x", "y"]);
//! ```

mod debug;
mod visit;
mod walk;

pub use debug::DebugVisitor;
pub use visit::Visitor;
pub use walk::{Walker, walk};
