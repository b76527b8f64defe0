//! Declaration, class member and `for`-header nodes.

use serde::Serialize;

use crate::{Node, Span};

/// A `var` declaration in declaration position (as opposed to a
/// [`VariableStatement`](crate::VariableStatement)).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableDeclaration<'a> {
    pub span: Span,
    pub list: &'a [Node<'a>],
}

/// Class field: `static? key = initializer;`
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition<'a> {
    pub span: Span,
    pub key: Node<'a>,
    pub initializer: Option<Node<'a>>,
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

/// Class method; `body` is a [`FunctionLiteral`](crate::FunctionLiteral).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition<'a> {
    pub span: Span,
    pub key: Node<'a>,
    pub kind: MethodKind,
    pub body: Node<'a>,
    pub is_static: bool,
}

/// `static { ... }` inside a class body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassStaticBlock<'a> {
    pub span: Span,
    pub block: Node<'a>,
}

/// `for (expression; ...)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForLoopInitializerExpression<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// `for (var a = 0, b = 1; ...)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForLoopInitializerVarDeclList<'a> {
    pub span: Span,
    pub list: &'a [Node<'a>],
}

/// `for (let i = 0; ...)`; `declaration` is a
/// [`LexicalDeclaration`](crate::LexicalDeclaration).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForLoopInitializerLexicalDecl<'a> {
    pub span: Span,
    pub declaration: Node<'a>,
}

/// `for (var binding in/of ...)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForIntoVar<'a> {
    pub span: Span,
    pub binding: Node<'a>,
}

/// `for (let target in/of ...)` or `for (const target in/of ...)`
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForDeclaration<'a> {
    pub span: Span,
    pub is_const: bool,
    pub target: Node<'a>,
}

/// `for (expression in/of ...)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForIntoExpression<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// A node produced by a parser extension (JSX, type annotations, ...).
///
/// The tree carries it so that producers can round-trip syntax this crate
/// does not model, but traversal has no child table for it.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionNode<'a> {
    pub span: Span,
    pub type_name: &'a str,
}
