//! Expression, pattern and literal nodes.

use serde::Serialize;

use crate::{Node, Span};

/// A single declarator or parameter: `target = initializer`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Binding<'a> {
    pub span: Span,
    pub target: Node<'a>,
    pub initializer: Option<Node<'a>>,
}

/// `yield argument` or `yield* argument`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YieldExpression<'a> {
    pub span: Span,
    pub argument: Option<Node<'a>>,
    pub delegate: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AwaitExpression<'a> {
    pub span: Span,
    pub argument: Node<'a>,
}

/// `[a, , b]`. Elisions are stored as `None`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArrayLiteral<'a> {
    pub span: Span,
    pub value: &'a [Option<Node<'a>>],
}

/// `[a, , b, ...rest]` in binding or assignment position.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArrayPattern<'a> {
    pub span: Span,
    pub elements: &'a [Option<Node<'a>>],
    pub rest: Option<Node<'a>>,
}

/// `left = right`, `left += right`, ...
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssignExpression<'a> {
    pub span: Span,
    pub operator: &'a str,
    pub left: Node<'a>,
    pub right: Node<'a>,
}

/// Placeholder the parser emits for an expression it could not parse.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadExpression {
    pub span: Span,
}

/// Arithmetic, comparison and logical operators alike.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BinaryExpression<'a> {
    pub span: Span,
    pub operator: &'a str,
    pub left: Node<'a>,
    pub right: Node<'a>,
}

/// `left[member]`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BracketExpression<'a> {
    pub span: Span,
    pub left: Node<'a>,
    pub member: Node<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CallExpression<'a> {
    pub span: Span,
    pub callee: Node<'a>,
    pub arguments: &'a [Node<'a>],
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConditionalExpression<'a> {
    pub span: Span,
    pub test: Node<'a>,
    pub consequent: Node<'a>,
    pub alternate: Node<'a>,
}

/// `left.property`. The property name is static and not a child node.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DotExpression<'a> {
    pub span: Span,
    pub left: Node<'a>,
    pub property: &'a str,
}

/// `left.#property`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrivateDotExpression<'a> {
    pub span: Span,
    pub left: Node<'a>,
    pub property: &'a str,
}

/// The outermost expression of an optional chain such as `a?.b.c`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionalChain<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// A single `?.` link inside an [`OptionalChain`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Optional<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// `function name(params) { body }` in expression or declaration position.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionLiteral<'a> {
    pub span: Span,
    pub name: Option<&'a str>,
    pub parameter_list: Node<'a>,
    pub body: Node<'a>,
    pub is_async: bool,
    pub is_generator: bool,
}

/// `class name extends super_class { body }`
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLiteral<'a> {
    pub span: Span,
    pub name: Option<&'a str>,
    pub super_class: Option<Node<'a>>,
    pub body: &'a [Node<'a>],
}

/// Concise body of an arrow function: `x => expression`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpressionBody<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// `(params) => body`, where `body` is a block or an [`ExpressionBody`].
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowFunctionLiteral<'a> {
    pub span: Span,
    pub parameter_list: Node<'a>,
    pub body: Node<'a>,
    pub is_async: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Identifier<'a> {
    pub span: Span,
    pub name: &'a str,
}

/// `#name` inside a class body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrivateIdentifier<'a> {
    pub span: Span,
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NewExpression<'a> {
    pub span: Span,
    pub callee: Node<'a>,
    pub arguments: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NullLiteral {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BooleanLiteral {
    pub span: Span,
    pub value: bool,
}

/// A numeric literal with its raw text and parsed value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumberLiteral<'a> {
    pub span: Span,
    pub literal: &'a str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StringLiteral<'a> {
    pub span: Span,
    pub literal: &'a str,
    pub value: &'a str,
}

/// `/pattern/flags`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegExpLiteral<'a> {
    pub span: Span,
    pub pattern: &'a str,
    pub flags: &'a str,
}

/// `{ a, b: 1, ...rest }`; `value` holds property nodes in source order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectLiteral<'a> {
    pub span: Span,
    pub value: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectPattern<'a> {
    pub span: Span,
    pub properties: &'a [Node<'a>],
    pub rest: Option<Node<'a>>,
}

/// Formal parameters of a function: one [`Binding`] per parameter plus an
/// optional rest target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterList<'a> {
    pub span: Span,
    pub list: &'a [Node<'a>],
    pub rest: Option<Node<'a>>,
}

/// Shorthand property `{ name }` or `{ name = initializer }` in a pattern.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PropertyShort<'a> {
    pub span: Span,
    pub name: &'a str,
    pub initializer: Option<Node<'a>>,
}

/// How a [`PropertyKeyed`] defines its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Value,
    Get,
    Set,
    Method,
}

/// `key: value`, `get key() {}`, `[computed]: value`, ...
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PropertyKeyed<'a> {
    pub span: Span,
    pub key: Node<'a>,
    pub kind: PropertyKind,
    pub computed: bool,
    pub value: Node<'a>,
}

/// `...expression` in array literals, call arguments and object literals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpreadElement<'a> {
    pub span: Span,
    pub expression: Node<'a>,
}

/// `a, b, c`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SequenceExpression<'a> {
    pub span: Span,
    pub sequence: &'a [Node<'a>],
}

/// A literal chunk of a template: the text between interpolations.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateElement<'a> {
    pub span: Span,
    pub literal: &'a str,
    pub cooked: Option<&'a str>,
}

/// `` tag`chunk ${expr} chunk` ``.
///
/// `elements` holds the literal chunks and `expressions` the interpolations,
/// each in source order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateLiteral<'a> {
    pub span: Span,
    pub tag: Option<Node<'a>>,
    pub elements: &'a [Node<'a>],
    pub expressions: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThisExpression {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuperExpression {
    pub span: Span,
}

/// Prefix and postfix unary operators, including `++`/`--`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnaryExpression<'a> {
    pub span: Span,
    pub operator: &'a str,
    pub postfix: bool,
    pub operand: Node<'a>,
}

/// `new.target` or `import.meta`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetaProperty<'a> {
    pub span: Span,
    pub meta: &'a str,
    pub property: &'a str,
}
