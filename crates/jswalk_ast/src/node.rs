//! The `Node` sum type and its kind discriminant.
//!
//! Every concrete node struct has exactly one `Node` variant wrapping an arena
//! reference to it, and one matching `NodeKind`. Both enums are generated from
//! a single list so they cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::Span;
use crate::declaration::*;
use crate::expression::*;
use crate::statement::*;

macro_rules! define_nodes {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// A reference to any node of the tree.
        ///
        /// `Node` is `Copy`: it is a tagged pointer into the arena that owns
        /// the tree, so passing it around never clones the underlying struct.
        #[derive(Debug, Clone, Copy, Serialize)]
        #[serde(tag = "type")]
        pub enum Node<'a> {
            $($variant(&'a $ty),)*
        }

        /// The kind of a [`Node`], without its payload.
        ///
        /// Serializes and displays as the PascalCase variant name.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum NodeKind {
            $($variant,)*
        }

        impl<'a> Node<'a> {
            /// Returns the kind of this node.
            #[inline]
            pub const fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)*
                }
            }

            /// Returns the source span of this node.
            #[inline]
            pub fn span(&self) -> Span {
                match self {
                    $(Node::$variant(node) => node.span,)*
                }
            }
        }

        impl NodeKind {
            /// Every node kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// Returns the PascalCase name of this kind.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                }
            }
        }

        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                #[inline]
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

define_nodes! {
    Program(Program<'a>),

    // Statements
    BadStatement(BadStatement),
    BlockStatement(BlockStatement<'a>),
    BranchStatement(BranchStatement<'a>),
    CaseStatement(CaseStatement<'a>),
    CatchStatement(CatchStatement<'a>),
    DebuggerStatement(DebuggerStatement),
    DoWhileStatement(DoWhileStatement<'a>),
    EmptyStatement(EmptyStatement),
    ExpressionStatement(ExpressionStatement<'a>),
    ForInStatement(ForInStatement<'a>),
    ForOfStatement(ForOfStatement<'a>),
    ForStatement(ForStatement<'a>),
    IfStatement(IfStatement<'a>),
    LabelledStatement(LabelledStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),
    VariableStatement(VariableStatement<'a>),
    LexicalDeclaration(LexicalDeclaration<'a>),
    WhileStatement(WhileStatement<'a>),
    WithStatement(WithStatement<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    ClassDeclaration(ClassDeclaration<'a>),

    // Expressions
    Binding(Binding<'a>),
    YieldExpression(YieldExpression<'a>),
    AwaitExpression(AwaitExpression<'a>),
    ArrayLiteral(ArrayLiteral<'a>),
    ArrayPattern(ArrayPattern<'a>),
    AssignExpression(AssignExpression<'a>),
    BadExpression(BadExpression),
    BinaryExpression(BinaryExpression<'a>),
    BracketExpression(BracketExpression<'a>),
    CallExpression(CallExpression<'a>),
    ConditionalExpression(ConditionalExpression<'a>),
    DotExpression(DotExpression<'a>),
    PrivateDotExpression(PrivateDotExpression<'a>),
    OptionalChain(OptionalChain<'a>),
    Optional(Optional<'a>),
    FunctionLiteral(FunctionLiteral<'a>),
    ClassLiteral(ClassLiteral<'a>),
    ExpressionBody(ExpressionBody<'a>),
    ArrowFunctionLiteral(ArrowFunctionLiteral<'a>),
    Identifier(Identifier<'a>),
    PrivateIdentifier(PrivateIdentifier<'a>),
    NewExpression(NewExpression<'a>),
    NullLiteral(NullLiteral),
    BooleanLiteral(BooleanLiteral),
    NumberLiteral(NumberLiteral<'a>),
    StringLiteral(StringLiteral<'a>),
    RegExpLiteral(RegExpLiteral<'a>),
    ObjectLiteral(ObjectLiteral<'a>),
    ObjectPattern(ObjectPattern<'a>),
    ParameterList(ParameterList<'a>),
    PropertyShort(PropertyShort<'a>),
    PropertyKeyed(PropertyKeyed<'a>),
    SpreadElement(SpreadElement<'a>),
    SequenceExpression(SequenceExpression<'a>),
    TemplateElement(TemplateElement<'a>),
    TemplateLiteral(TemplateLiteral<'a>),
    ThisExpression(ThisExpression),
    SuperExpression(SuperExpression),
    UnaryExpression(UnaryExpression<'a>),
    MetaProperty(MetaProperty<'a>),

    // Declarations and class members
    VariableDeclaration(VariableDeclaration<'a>),
    FieldDefinition(FieldDefinition<'a>),
    MethodDefinition(MethodDefinition<'a>),
    ClassStaticBlock(ClassStaticBlock<'a>),

    // `for` headers
    ForLoopInitializerExpression(ForLoopInitializerExpression<'a>),
    ForLoopInitializerVarDeclList(ForLoopInitializerVarDeclList<'a>),
    ForLoopInitializerLexicalDecl(ForLoopInitializerLexicalDecl<'a>),
    ForIntoVar(ForIntoVar<'a>),
    ForDeclaration(ForDeclaration<'a>),
    ForIntoExpression(ForIntoExpression<'a>),

    // Parser extensions
    Extension(ExtensionNode<'a>),
}

impl NodeKind {
    /// Returns true if nodes of this kind never have child nodes.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::BadStatement
                | NodeKind::BranchStatement
                | NodeKind::DebuggerStatement
                | NodeKind::EmptyStatement
                | NodeKind::BadExpression
                | NodeKind::Identifier
                | NodeKind::PrivateIdentifier
                | NodeKind::NullLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NumberLiteral
                | NodeKind::StringLiteral
                | NodeKind::RegExpLiteral
                | NodeKind::TemplateElement
                | NodeKind::ThisExpression
                | NodeKind::SuperExpression
                | NodeKind::MetaProperty
        )
    }

    /// Returns true if this kind appears in statement position.
    #[inline]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::BadStatement
                | NodeKind::BlockStatement
                | NodeKind::BranchStatement
                | NodeKind::CaseStatement
                | NodeKind::CatchStatement
                | NodeKind::DebuggerStatement
                | NodeKind::DoWhileStatement
                | NodeKind::EmptyStatement
                | NodeKind::ExpressionStatement
                | NodeKind::ForInStatement
                | NodeKind::ForOfStatement
                | NodeKind::ForStatement
                | NodeKind::IfStatement
                | NodeKind::LabelledStatement
                | NodeKind::ReturnStatement
                | NodeKind::SwitchStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::VariableStatement
                | NodeKind::LexicalDeclaration
                | NodeKind::WhileStatement
                | NodeKind::WithStatement
                | NodeKind::FunctionDeclaration
                | NodeKind::ClassDeclaration
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let span = self.span();
        match self {
            Node::Identifier(ident) => write!(f, "Identifier({})", ident.name),
            Node::PrivateIdentifier(ident) => write!(f, "PrivateIdentifier(#{})", ident.name),
            Node::NumberLiteral(lit) => write!(f, "NumberLiteral({})", lit.literal),
            Node::StringLiteral(lit) => write!(f, "StringLiteral({})", lit.literal),
            Node::BinaryExpression(expr) => write!(f, "BinaryExpression({})", expr.operator),
            Node::AssignExpression(expr) => write!(f, "AssignExpression({})", expr.operator),
            Node::UnaryExpression(expr) => write!(f, "UnaryExpression({})", expr.operator),
            Node::Extension(ext) => write!(f, "Extension({})", ext.type_name),
            _ => write!(f, "{}@{}..{}", self.kind(), span.start, span.end),
        }
    }
}
