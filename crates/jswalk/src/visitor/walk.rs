//! The traversal engine.
//!
//! [`Walker::walk`] descends depth-first through a tree, calling
//! [`Visitor::enter`] before a node's children and [`Visitor::exit`] after
//! them. The child table in `Walker::walk_children` lists, for every node
//! kind, which slots hold children and the order they are visited in. That
//! order follows the source text, except that `do ... while` visits its test
//! before its body.

use jswalk_ast::Node;
use tracing::{debug, trace, warn};

use crate::{WalkConfig, WalkError};

use super::visit::Visitor;

/// Walks `node` and its descendants with the default configuration.
///
/// See [`Walker::walk`].
pub fn walk<'a>(
    visitor: Option<&mut dyn Visitor<'a>>,
    node: Option<Node<'a>>,
) -> Result<(), WalkError> {
    Walker::new().walk(visitor, node)
}

/// Depth-first traversal engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    /// Creates a walker without a depth limit.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a walker with the given configuration.
    #[inline]
    pub fn with_config(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this walker.
    #[inline]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walks `node` and its descendants.
    ///
    /// Preconditions are checked in order: an absent node fails with
    /// [`WalkError::NilNode`], an absent visitor with
    /// [`WalkError::NilVisitor`]. Neither calls the visitor.
    ///
    /// The first error raised inside the tree stops the walk: remaining
    /// siblings are not visited, and every node already entered is still
    /// exited before the error is returned.
    pub fn walk<'a>(
        &self,
        visitor: Option<&mut dyn Visitor<'a>>,
        node: Option<Node<'a>>,
    ) -> Result<(), WalkError> {
        let Some(node) = node else {
            debug!("walk called without a node");
            return Err(WalkError::NilNode);
        };
        let Some(visitor) = visitor else {
            debug!(kind = %node.kind(), "walk called without a visitor");
            return Err(WalkError::NilVisitor);
        };

        trace!(kind = %node.kind(), max_depth = ?self.config.max_depth, "walk");
        self.walk_node(visitor, node, 1)
    }

    fn walk_node<'a>(
        &self,
        visitor: &mut dyn Visitor<'a>,
        node: Node<'a>,
        depth: usize,
    ) -> Result<(), WalkError> {
        if let Some(limit) = self.config.max_depth
            && depth > limit.get()
        {
            warn!(kind = %node.kind(), limit = limit.get(), "traversal depth limit exceeded");
            return Err(WalkError::DepthLimitExceeded {
                limit: limit.get(),
                kind: node.kind(),
            });
        }

        let Some(active) = visitor.enter(node) else {
            return Err(WalkError::EnterReturnedNil { kind: node.kind() });
        };

        let guard = ExitGuard {
            visitor: active,
            node,
        };
        let result = self.walk_children(guard.visitor, node, depth);
        drop(guard);
        result
    }

    /// Visits the children of `node` in source order.
    ///
    /// Absent optional slots and array elisions are skipped.
    fn walk_children<'a>(
        &self,
        visitor: &mut dyn Visitor<'a>,
        node: Node<'a>,
        depth: usize,
    ) -> Result<(), WalkError> {
        let mut children = Children {
            walker: self,
            visitor,
            depth: depth + 1,
        };

        match node {
            Node::Program(n) => children.list(n.body),

            // Statements
            Node::BlockStatement(n) => children.list(n.list),
            Node::CaseStatement(n) => {
                children.optional(n.test)?;
                children.list(n.consequent)
            }
            Node::CatchStatement(n) => {
                children.optional(n.parameter)?;
                children.node(n.body)
            }
            Node::DoWhileStatement(n) => {
                children.node(n.test)?;
                children.node(n.body)
            }
            Node::ExpressionStatement(n) => children.node(n.expression),
            Node::ForInStatement(n) => {
                children.node(n.into)?;
                children.node(n.source)?;
                children.node(n.body)
            }
            Node::ForOfStatement(n) => {
                children.node(n.into)?;
                children.node(n.source)?;
                children.node(n.body)
            }
            Node::ForStatement(n) => {
                children.optional(n.initializer)?;
                children.optional(n.test)?;
                children.optional(n.update)?;
                children.node(n.body)
            }
            Node::IfStatement(n) => {
                children.node(n.test)?;
                children.node(n.consequent)?;
                children.optional(n.alternate)
            }
            Node::LabelledStatement(n) => {
                children.node(n.label)?;
                children.node(n.statement)
            }
            Node::ReturnStatement(n) => children.optional(n.argument),
            Node::SwitchStatement(n) => {
                children.node(n.discriminant)?;
                children.list(n.body)
            }
            Node::ThrowStatement(n) => children.node(n.argument),
            Node::TryStatement(n) => {
                children.node(n.body)?;
                children.optional(n.catch)?;
                children.optional(n.finally)
            }
            Node::VariableStatement(n) => children.list(n.list),
            Node::LexicalDeclaration(n) => children.list(n.list),
            Node::WhileStatement(n) => {
                children.node(n.test)?;
                children.node(n.body)
            }
            Node::WithStatement(n) => {
                children.node(n.object)?;
                children.node(n.body)
            }
            Node::FunctionDeclaration(n) => children.node(n.function),
            Node::ClassDeclaration(n) => children.node(n.class),

            // Expressions
            Node::Binding(n) => {
                children.node(n.target)?;
                children.optional(n.initializer)
            }
            Node::YieldExpression(n) => children.optional(n.argument),
            Node::AwaitExpression(n) => children.node(n.argument),
            Node::ArrayLiteral(n) => children.elided(n.value),
            Node::ArrayPattern(n) => {
                children.elided(n.elements)?;
                children.optional(n.rest)
            }
            Node::AssignExpression(n) => {
                children.node(n.left)?;
                children.node(n.right)
            }
            Node::BinaryExpression(n) => {
                children.node(n.left)?;
                children.node(n.right)
            }
            Node::BracketExpression(n) => {
                children.node(n.left)?;
                children.node(n.member)
            }
            Node::CallExpression(n) => {
                children.node(n.callee)?;
                children.list(n.arguments)
            }
            Node::ConditionalExpression(n) => {
                children.node(n.test)?;
                children.node(n.consequent)?;
                children.node(n.alternate)
            }
            Node::DotExpression(n) => children.node(n.left),
            Node::PrivateDotExpression(n) => children.node(n.left),
            Node::OptionalChain(n) => children.node(n.expression),
            Node::Optional(n) => children.node(n.expression),
            Node::FunctionLiteral(n) => {
                children.node(n.parameter_list)?;
                children.node(n.body)
            }
            Node::ClassLiteral(n) => {
                children.optional(n.super_class)?;
                children.list(n.body)
            }
            Node::ExpressionBody(n) => children.node(n.expression),
            Node::ArrowFunctionLiteral(n) => {
                children.node(n.parameter_list)?;
                children.node(n.body)
            }
            Node::NewExpression(n) => {
                children.node(n.callee)?;
                children.list(n.arguments)
            }
            Node::ObjectLiteral(n) => children.list(n.value),
            Node::ObjectPattern(n) => {
                children.list(n.properties)?;
                children.optional(n.rest)
            }
            Node::ParameterList(n) => {
                children.list(n.list)?;
                children.optional(n.rest)
            }
            Node::PropertyShort(n) => children.optional(n.initializer),
            Node::PropertyKeyed(n) => {
                children.node(n.key)?;
                children.node(n.value)
            }
            Node::SpreadElement(n) => children.node(n.expression),
            Node::SequenceExpression(n) => children.list(n.sequence),
            Node::TemplateLiteral(n) => {
                children.optional(n.tag)?;
                children.list(n.elements)?;
                children.list(n.expressions)
            }
            Node::UnaryExpression(n) => children.node(n.operand),

            // Declarations and class members
            Node::VariableDeclaration(n) => children.list(n.list),
            Node::FieldDefinition(n) => {
                children.node(n.key)?;
                children.optional(n.initializer)
            }
            Node::MethodDefinition(n) => {
                children.node(n.key)?;
                children.node(n.body)
            }
            Node::ClassStaticBlock(n) => children.node(n.block),

            // `for` headers
            Node::ForLoopInitializerExpression(n) => children.node(n.expression),
            Node::ForLoopInitializerVarDeclList(n) => children.list(n.list),
            Node::ForLoopInitializerLexicalDecl(n) => children.node(n.declaration),
            Node::ForIntoVar(n) => children.node(n.binding),
            Node::ForDeclaration(n) => children.node(n.target),
            Node::ForIntoExpression(n) => children.node(n.expression),

            // Leaves
            Node::BadStatement(_)
            | Node::BranchStatement(_)
            | Node::DebuggerStatement(_)
            | Node::EmptyStatement(_)
            | Node::BadExpression(_)
            | Node::Identifier(_)
            | Node::PrivateIdentifier(_)
            | Node::NullLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::NumberLiteral(_)
            | Node::StringLiteral(_)
            | Node::RegExpLiteral(_)
            | Node::TemplateElement(_)
            | Node::ThisExpression(_)
            | Node::SuperExpression(_)
            | Node::MetaProperty(_) => Ok(()),

            Node::Extension(n) => {
                warn!(
                    type_name = n.type_name,
                    start = n.span.start,
                    end = n.span.end,
                    "cannot determine children of node; grammar table is out of date"
                );
                Err(WalkError::unknown_node_kind(n.type_name, n.span))
            }
        }
    }
}

/// Calls `exit` on the active visitor when the frame ends.
///
/// Dropping the guard is the only place `exit` is called, so it runs on the
/// success path, on error propagation from children, and during unwinding.
struct ExitGuard<'v, 'a> {
    visitor: &'v mut dyn Visitor<'a>,
    node: Node<'a>,
}

impl Drop for ExitGuard<'_, '_> {
    fn drop(&mut self) {
        self.visitor.exit(self.node);
    }
}

/// Child slots of one node, visited with the node's active visitor.
struct Children<'w, 'v, 'a> {
    walker: &'w Walker,
    visitor: &'v mut dyn Visitor<'a>,
    depth: usize,
}

impl<'a> Children<'_, '_, 'a> {
    #[inline]
    fn node(&mut self, node: Node<'a>) -> Result<(), WalkError> {
        self.walker.walk_node(self.visitor, node, self.depth)
    }

    #[inline]
    fn optional(&mut self, node: Option<Node<'a>>) -> Result<(), WalkError> {
        match node {
            Some(node) => self.node(node),
            None => Ok(()),
        }
    }

    fn list(&mut self, nodes: &[Node<'a>]) -> Result<(), WalkError> {
        for &node in nodes {
            self.node(node)?;
        }
        Ok(())
    }

    fn elided(&mut self, nodes: &[Option<Node<'a>>]) -> Result<(), WalkError> {
        for &node in nodes {
            self.optional(node)?;
        }
        Ok(())
    }
}
