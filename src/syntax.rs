//! Optional syntax-tree support.
//!
//! The Python pipeline parses a tree-sitter tree and threads it through the
//! rule tables so rules can consult structure when a tree is available. The
//! current rules match on text only; a failed parse downgrades analysis to
//! text-only heuristics and surfaces a single informational recommendation.
//!
//! The `tree-sitter` feature (on by default) pulls in the Python grammar.
//! With the feature disabled every source parses as [`ParseOutcome::Unavailable`]
//! and analysis behaves as if the tree were never requested.

/// Outcome of attempting to parse a source file.
pub enum ParseOutcome {
    /// A well-formed tree.
    Tree(SyntaxTree),
    /// The source has syntax errors; analysis proceeds without a tree.
    Invalid,
    /// No parser is available (feature disabled).
    Unavailable,
}

/// A parsed syntax tree handed to rules alongside the source text.
#[cfg(feature = "tree-sitter")]
pub struct SyntaxTree {
    tree: tree_sitter::Tree,
}

#[cfg(feature = "tree-sitter")]
impl SyntaxTree {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// Placeholder when no parser is compiled in; rules only ever see `None`.
#[cfg(not(feature = "tree-sitter"))]
pub struct SyntaxTree {
    _private: (),
}

/// Parse Python source. Syntax errors anywhere in the tree count as a
/// failed parse; the heuristics are line-oriented and a broken tree is
/// worse than no tree.
#[cfg(feature = "tree-sitter")]
pub fn parse_python(content: &str) -> ParseOutcome {
    let mut parser = tree_sitter::Parser::new();
    if parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .is_err()
    {
        return ParseOutcome::Unavailable;
    }
    match parser.parse(content, None) {
        Some(tree) if !tree.root_node().has_error() => ParseOutcome::Tree(SyntaxTree { tree }),
        Some(_) | None => ParseOutcome::Invalid,
    }
}

#[cfg(not(feature = "tree-sitter"))]
pub fn parse_python(_content: &str) -> ParseOutcome {
    ParseOutcome::Unavailable
}
