//! tree-sitter backed parsers
//!
//! Lets a [`TagRuleTable`](super::TagRuleTable) highlight any tree-sitter
//! grammar: tree-sitter node kinds are used directly as selector segments
//! (e.g. `pair/string`).

use std::fmt;
use std::ops::Range;

use tree_sitter::{Language, Node, Parser, Tree};

use super::tree::{LanguageParser, SpannedNode, SyntaxNode, SyntaxTree};

impl SyntaxNode for Node<'_> {
    fn node_type(&self) -> &str {
        self.kind()
    }

    fn parent(&self) -> Option<Self> {
        Node::parent(self)
    }
}

impl SpannedNode for Node<'_> {
    fn byte_range(&self) -> Range<usize> {
        Node::byte_range(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        let children = Node::children(self, &mut cursor).collect();
        children
    }
}

impl SyntaxTree for Tree {
    type Node<'t> = Node<'t>;

    fn root_node(&self) -> Node<'_> {
        Tree::root_node(self)
    }
}

/// A [`LanguageParser`] for a tree-sitter grammar.
///
/// tree-sitter parsers are not `Sync`, so a fresh one is created per parse.
#[derive(Clone)]
pub struct TreeSitterParser {
    language: Language,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl fmt::Debug for TreeSitterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSitterParser").finish_non_exhaustive()
    }
}

impl LanguageParser for TreeSitterParser {
    type Tree = Tree;

    fn parse(&self, source: &str) -> Option<Tree> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&self.language) {
            tracing::error!("Failed to set tree-sitter language: {}", e);
            return None;
        }
        parser.parse(source, None)
    }
}
