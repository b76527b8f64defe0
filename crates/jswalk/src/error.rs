//! Traversal error types.

use jswalk_ast::{NodeKind, Span};
use thiserror::Error;

/// Errors that can stop a traversal.
///
/// Every variant describes a contract violation by the caller, the visitor or
/// the tree producer. None of them is transient, so the engine never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// `walk` was called without a root node.
    #[error("node is absent")]
    NilNode,

    /// `walk` was called without a visitor.
    #[error("visitor is absent")]
    NilVisitor,

    /// `Visitor::enter` returned no visitor for the subtree.
    #[error("visitor enter returned no visitor for {kind} node")]
    EnterReturnedNil {
        /// Kind of the node whose `enter` failed.
        kind: NodeKind,
    },

    /// The tree contains a node the dispatch table does not cover.
    #[error("unknown node kind `{type_name}` at {}..{}", .span.start, .span.end)]
    UnknownNodeKind {
        /// Type name reported by the tree producer.
        type_name: String,
        /// Span of the offending node.
        span: Span,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("maximum traversal depth of {limit} exceeded at {kind} node")]
    DepthLimitExceeded {
        /// Configured maximum depth.
        limit: usize,
        /// Kind of the first node beyond the limit.
        kind: NodeKind,
    },
}

impl WalkError {
    /// Creates an unknown node kind error.
    pub fn unknown_node_kind(type_name: impl Into<String>, span: Span) -> Self {
        Self::UnknownNodeKind {
            type_name: type_name.into(),
            span,
        }
    }

    /// Returns true if the error was raised before any visitor call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NilNode | Self::NilVisitor)
    }
}

/// Errors that can occur while loading a [`WalkConfig`](crate::WalkConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or does not match the schema.
    #[error("Invalid walk configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nil_node(WalkError::NilNode, "node is absent")]
    #[case::nil_visitor(WalkError::NilVisitor, "visitor is absent")]
    #[case::enter_returned_nil(
        WalkError::EnterReturnedNil { kind: NodeKind::IfStatement },
        "visitor enter returned no visitor for IfStatement node"
    )]
    #[case::unknown_kind(
        WalkError::unknown_node_kind("JSXElement", Span::new(3, 17)),
        "unknown node kind `JSXElement` at 3..17"
    )]
    #[case::depth_limit(
        WalkError::DepthLimitExceeded { limit: 2, kind: NodeKind::Identifier },
        "maximum traversal depth of 2 exceeded at Identifier node"
    )]
    fn test_error_messages(#[case] error: WalkError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_is_precondition() {
        assert!(WalkError::NilNode.is_precondition());
        assert!(WalkError::NilVisitor.is_precondition());
        assert!(
            !WalkError::EnterReturnedNil {
                kind: NodeKind::Program
            }
            .is_precondition()
        );
    }
}
