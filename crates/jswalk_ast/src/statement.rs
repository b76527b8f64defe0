//! Program and statement nodes.

use serde::Serialize;

use crate::{Node, Span};

/// Root of a parsed script or module.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Program<'a> {
    pub span: Span,
    pub body: &'a [Node<'a>],
}

/// Placeholder the parser emits for a statement it could not parse.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadStatement {
    pub span: Span,
}

/// `{ ... }`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlockStatement<'a> {
    pub span: Span,
    pub list: &'a [Node<'a>],
}

/// Keyword of a [`BranchStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchKind {
    Break,
    Continue,
}

/// `break` or `continue`, with an optional label.
///
/// The label is kept as a plain name and is not a child node.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BranchStatement<'a> {
    pub span: Span,
    pub token: BranchKind,
    pub label: Option<&'a str>,
}

/// A `case` or `default` clause of a `switch`.
///
/// `test` is `None` for the `default` clause.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaseStatement<'a> {
    pub span: Span,
    pub test: Option<Node<'a>>,
    pub consequent: &'a [Node<'a>],
}

/// `catch (parameter) { ... }`; the parameter is optional since ES2019.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatchStatement<'a> {
    pub span: Span,
    pub parameter: Option<Node<'a>>,
    pub body: Node<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DebuggerStatement {
    pub span: Span,
}

/// `do body while (test)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoWhileStatement<'a> {
    pub span: Span,
    pub test: Node<'a>,
    pub body: Node<'a>,
}

/// A lone `;`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmptyStatement {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpressionStatement<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// `for (into in source) body`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForInStatement<'a> {
    pub span: Span,
    pub into: Node<'a>,
    pub source: Node<'a>,
    pub body: Node<'a>,
}

/// `for (into of source) body`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForOfStatement<'a> {
    pub span: Span,
    pub into: Node<'a>,
    pub source: Node<'a>,
    pub body: Node<'a>,
}

/// `for (initializer; test; update) body`; all three header parts may be absent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForStatement<'a> {
    pub span: Span,
    pub initializer: Option<Node<'a>>,
    pub test: Option<Node<'a>>,
    pub update: Option<Node<'a>>,
    pub body: Node<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IfStatement<'a> {
    pub span: Span,
    pub test: Node<'a>,
    pub consequent: Node<'a>,
    pub alternate: Option<Node<'a>>,
}

/// `label: statement`. The label is an [`Identifier`](crate::Identifier) node.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabelledStatement<'a> {
    pub span: Span,
    pub label: Node<'a>,
    pub statement: Node<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReturnStatement<'a> {
    pub span: Span,
    pub argument: Option<Node<'a>>,
}

/// `switch (discriminant) { body }`, where `body` holds [`CaseStatement`]s.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SwitchStatement<'a> {
    pub span: Span,
    pub discriminant: Node<'a>,
    pub body: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThrowStatement<'a> {
    pub span: Span,
    pub argument: Node<'a>,
}

/// `try body catch finally`; at least one of `catch` and `finally` is present
/// in well-formed input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TryStatement<'a> {
    pub span: Span,
    pub body: Node<'a>,
    pub catch: Option<Node<'a>>,
    pub finally: Option<Node<'a>>,
}

/// `var a = 1, b;` with one [`Binding`](crate::Binding) per declarator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableStatement<'a> {
    pub span: Span,
    pub list: &'a [Node<'a>],
}

/// Keyword of a [`LexicalDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LexicalKind {
    Let,
    Const,
}

/// `let` / `const` declaration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LexicalDeclaration<'a> {
    pub span: Span,
    pub token: LexicalKind,
    pub list: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WhileStatement<'a> {
    pub span: Span,
    pub test: Node<'a>,
    pub body: Node<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WithStatement<'a> {
    pub span: Span,
    pub object: Node<'a>,
    pub body: Node<'a>,
}

/// Statement wrapper around a [`FunctionLiteral`](crate::FunctionLiteral).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionDeclaration<'a> {
    pub span: Span,
    pub function: Node<'a>,
}

/// Statement wrapper around a [`ClassLiteral`](crate::ClassLiteral).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassDeclaration<'a> {
    pub span: Span,
    pub class: Node<'a>,
}
