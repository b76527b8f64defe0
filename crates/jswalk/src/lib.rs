//! # jswalk
//!
//! Depth-first Enter/Exit traversal for ECMAScript ASTs.
//!
//! This crate provides:
//! - The [`Visitor`] protocol: `enter` before a node's children, `exit` after
//! - [`walk`] and [`Walker`]: the traversal engine, with a child table that
//!   covers every node kind in [`jswalk_ast`]
//! - [`WalkConfig`]: optional depth limit for untrusted input
//! - [`DebugVisitor`]: prints every node for manual inspection
//!
//! ## Example
//!
//! ```rust
//! use jswalk::{DebugVisitor, walk};
//! use jswalk_ast::{AstArena, ExpressionStatement, Identifier, Program, Span};
//!
//! let source = "a;";
//! let arena = AstArena::new();
//! let ident = arena.alloc_node(Identifier { span: Span::new(0, 1), name: "a" });
//! let stmt = arena.alloc_node(ExpressionStatement { span: Span::new(0, 2), expression: ident });
//! let program = arena.alloc_node(Program {
//!     span: Span::new(0, 2),
//!     body: arena.alloc_nodes(&[stmt]),
//! });
//!
//! let mut visitor = DebugVisitor::new(Vec::new()).with_source(source);
//! walk(Some(&mut visitor), Some(program)).unwrap();
//! let output = String::from_utf8(visitor.finish().unwrap()).unwrap();
//! assert_eq!(output.lines().count(), 6);
//! ```

mod config;
mod error;
pub mod visitor;

pub use config::WalkConfig;
pub use error::{ConfigError, WalkError};
pub use visitor::{DebugVisitor, Visitor, Walker, walk};
