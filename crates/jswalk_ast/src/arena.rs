//! Arena allocator for AST nodes.
//!
//! Uses `bumpalo` for bump allocation. A parser allocates every node of one
//! program in the same arena, and the whole tree is freed at once when the
//! arena is dropped.

use bumpalo::Bump;

use crate::Node;

/// Arena allocator for AST nodes.
///
/// # Example
///
/// ```rust
/// use jswalk_ast::{AstArena, Identifier, NodeKind, Span};
///
/// let arena = AstArena::new();
/// let node = arena.alloc_node(Identifier { span: Span::new(0, 1), name: "a" });
/// assert_eq!(node.kind(), NodeKind::Identifier);
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a node struct and wraps the reference in a [`Node`].
    #[inline]
    pub fn alloc_node<'a, T: 'a>(&'a self, node: T) -> Node<'a>
    where
        &'a T: Into<Node<'a>>,
    {
        let node: &'a T = self.bump.alloc(node);
        node.into()
    }

    /// Copies a list of child nodes into the arena.
    #[inline]
    pub fn alloc_nodes<'a>(&'a self, nodes: &[Node<'a>]) -> &'a [Node<'a>] {
        self.bump.alloc_slice_copy(nodes)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, deallocating all allocated objects.
    ///
    /// Note: This does NOT call `Drop` for allocated objects.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockStatement, EmptyStatement, NodeKind, Span};

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("hello world");
        assert_eq!(s, "hello world");
    }

    #[test]
    fn test_alloc_node_builds_tree() {
        let arena = AstArena::new();
        let empty = arena.alloc_node(EmptyStatement {
            span: Span::new(1, 2),
        });
        let block = arena.alloc_node(BlockStatement {
            span: Span::new(0, 3),
            list: arena.alloc_nodes(&[empty, empty]),
        });

        assert_eq!(block.kind(), NodeKind::BlockStatement);
        let Node::BlockStatement(block) = block else {
            panic!("expected a block statement");
        };
        assert_eq!(block.list.len(), 2);
        assert_eq!(block.list[0].kind(), NodeKind::EmptyStatement);
    }

    #[test]
    fn test_arena_reset() {
        let mut arena = AstArena::with_capacity(64);
        let _ = arena.alloc(42u32);
        arena.reset();
        let value = arena.alloc(100u32);
        assert_eq!(*value, 100);
        assert!(arena.allocated_bytes() > 0);
    }
}
