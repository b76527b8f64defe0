//! The Enter/Exit visitor protocol.

use jswalk_ast::Node;

/// A traversal client.
///
/// The walker calls [`enter`](Visitor::enter) before a node's children and
/// [`exit`](Visitor::exit) after all of them, so every node is bracketed by
/// exactly one pair of calls.
///
/// # Subtree visitors
///
/// `enter` returns the visitor that handles the node's subtree. Returning
/// `Some(self)` keeps the current visitor. Returning a reference to another
/// visitor the current one owns substitutes it for the subtree: it receives
/// `enter`/`exit` for every descendant and `exit` for the node itself, and the
/// caller's visitor takes over again for the node's siblings.
///
/// Returning `None` is a protocol violation and stops the walk with
/// [`WalkError::EnterReturnedNil`](crate::WalkError::EnterReturnedNil).
///
/// # Example
///
/// ```rust
/// use jswalk::{Visitor, walk};
/// use jswalk_ast::{AstArena, Identifier, Node, Span};
///
/// #[derive(Default)]
/// struct Names<'a>(Vec<&'a str>);
///
/// impl<'a> Visitor<'a> for Names<'a> {
///     fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>> {
///         if let Node::Identifier(ident) = node {
///             self.0.push(ident.name);
///         }
///         Some(self)
///     }
/// }
///
/// let arena = AstArena::new();
/// let ident = arena.alloc_node(Identifier { span: Span::new(0, 1), name: "a" });
///
/// let mut names = Names::default();
/// walk(Some(&mut names), Some(ident)).unwrap();
/// assert_eq!(names.0, vec!["a"]);
/// ```
pub trait Visitor<'a> {
    /// Called before the children of `node` are visited.
    ///
    /// Returns the visitor to use for the subtree rooted at `node`.
    fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>>;

    /// Called after every descendant of `node` has been exited.
    ///
    /// Runs on the visitor returned by `enter`, on every path out of the
    /// node, including when a descendant stopped the walk with an error.
    #[inline]
    fn exit(&mut self, _node: Node<'a>) {}
}
