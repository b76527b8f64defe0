//! A visitor that prints every node it enters and exits.

use std::io::{self, Write};

use jswalk_ast::Node;

use super::visit::Visitor;

/// Maximum number of characters of source text shown per line.
const EXCERPT_LEN: usize = 32;

/// Writes one line per `enter` and `exit` call, indented by depth.
///
/// Each line holds the direction, the node kind, its span and, when the
/// source text is known, an excerpt of the node's source:
///
/// ```text
/// enter IfStatement 0..12 `if (a) b();`
///   enter Identifier 4..5 `a`
///   exit Identifier 4..5 `a`
/// ```
///
/// Write errors are kept and returned by [`DebugVisitor::finish`]; after the
/// first error nothing more is written.
pub struct DebugVisitor<'s, W> {
    out: W,
    source: Option<&'s str>,
    depth: usize,
    error: Option<io::Error>,
}

impl<'s, W: Write> DebugVisitor<'s, W> {
    /// Creates a visitor writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            source: None,
            depth: 0,
            error: None,
        }
    }

    /// Shows an excerpt of `source` for every node.
    pub fn with_source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, direction: &str, node: Node<'_>) {
        if self.error.is_some() {
            return;
        }

        let span = node.span();
        let indent = "  ".repeat(self.depth);
        let snippet = self
            .source
            .and_then(|source| span.source_text(source))
            .map(excerpt);
        let result = match snippet {
            Some(text) => writeln!(
                self.out,
                "{indent}{direction} {} {}..{} `{text}`",
                node.kind(),
                span.start,
                span.end
            ),
            None => writeln!(
                self.out,
                "{indent}{direction} {} {}..{}",
                node.kind(),
                span.start,
                span.end
            ),
        };
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<'a, W: Write> Visitor<'a> for DebugVisitor<'_, W> {
    fn enter(&mut self, node: Node<'a>) -> Option<&mut dyn Visitor<'a>> {
        self.line("enter", node);
        self.depth += 1;
        Some(self)
    }

    fn exit(&mut self, node: Node<'a>) {
        self.depth = self.depth.saturating_sub(1);
        self.line("exit", node);
    }
}

/// First line of `text`, cut to [`EXCERPT_LEN`] characters.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut out: String = first_line.chars().take(EXCERPT_LEN).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text() {
        assert_eq!(excerpt("a > 0"), "a > 0");
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_excerpt_multiline_text() {
        assert_eq!(excerpt("{\n  return a;\n}"), "{...");
    }

    #[test]
    fn test_excerpt_long_text() {
        let text = "x".repeat(40);
        assert_eq!(excerpt(&text), format!("{}...", "x".repeat(EXCERPT_LEN)));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported_by_finish() {
        let ident = jswalk_ast::Identifier {
            span: jswalk_ast::Span::new(0, 1),
            name: "a",
        };
        let mut visitor = DebugVisitor::new(FailingWriter);
        let node = Node::from(&ident);
        assert!(visitor.enter(node).is_some());
        visitor.exit(node);

        let err = visitor.finish().err().unwrap();
        assert_eq!(err.to_string(), "closed");
    }
}
