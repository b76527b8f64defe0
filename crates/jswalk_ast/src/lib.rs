//! # jswalk_ast
//!
//! ECMAScript AST definitions for jswalk.
//!
//! This crate provides the node types a JavaScript parser produces and the
//! traversal engine in `jswalk` consumes.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes of one program are allocated in a single arena
//! - Nodes refer to their children through `Node`, a `Copy` enum of arena
//!   references, so a child slot is either `Node`, `Option<Node>` or a slice
//! - Scalar payload (operators, names, literal values) is stored inline and is
//!   not part of the child structure
//!
//! ## Example
//!
//! ```rust
//! use jswalk_ast::{AstArena, ExpressionStatement, Identifier, Node, Program, Span};
//!
//! let arena = AstArena::new();
//!
//! // `a;`
//! let ident = arena.alloc_node(Identifier { span: Span::new(0, 1), name: "a" });
//! let stmt = arena.alloc_node(ExpressionStatement {
//!     span: Span::new(0, 2),
//!     expression: ident,
//! });
//! let program = arena.alloc_node(Program {
//!     span: Span::new(0, 2),
//!     body: arena.alloc_nodes(&[stmt]),
//! });
//! assert!(matches!(program, Node::Program(p) if p.body.len() == 1));
//! ```

mod arena;
mod declaration;
mod expression;
mod node;
mod span;
mod statement;

pub use arena::AstArena;
pub use declaration::{
    ClassStaticBlock, ExtensionNode, FieldDefinition, ForDeclaration, ForIntoExpression,
    ForIntoVar, ForLoopInitializerExpression, ForLoopInitializerLexicalDecl,
    ForLoopInitializerVarDeclList, MethodDefinition, MethodKind, VariableDeclaration,
};
pub use expression::{
    ArrayLiteral, ArrayPattern, ArrowFunctionLiteral, AssignExpression, AwaitExpression,
    BadExpression, BinaryExpression, Binding, BooleanLiteral, BracketExpression, CallExpression,
    ClassLiteral, ConditionalExpression, DotExpression, ExpressionBody, FunctionLiteral,
    Identifier, MetaProperty, NewExpression, NullLiteral, NumberLiteral, ObjectLiteral,
    ObjectPattern, Optional, OptionalChain, ParameterList, PrivateDotExpression,
    PrivateIdentifier, PropertyKeyed, PropertyKind, PropertyShort, RegExpLiteral,
    SequenceExpression, SpreadElement, StringLiteral, SuperExpression, TemplateElement,
    TemplateLiteral, ThisExpression, UnaryExpression, YieldExpression,
};
pub use node::{Node, NodeKind};
pub use span::Span;
pub use statement::{
    BadStatement, BlockStatement, BranchKind, BranchStatement, CaseStatement, CatchStatement,
    ClassDeclaration, DebuggerStatement, DoWhileStatement, EmptyStatement, ExpressionStatement,
    ForInStatement, ForOfStatement, ForStatement, FunctionDeclaration, IfStatement,
    LabelledStatement, LexicalDeclaration, LexicalKind, Program, ReturnStatement,
    SwitchStatement, ThrowStatement, TryStatement, VariableStatement, WhileStatement,
    WithStatement,
};
