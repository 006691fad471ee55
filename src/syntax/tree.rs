//! Capabilities the highlighting core needs from a parser
//!
//! Tag resolution only needs a node's type and its ancestors. The highlight
//! pass additionally needs byte ranges and children. Any parser whose nodes
//! provide these can be paired with a [`TagRuleTable`](super::TagRuleTable).

use std::ops::Range;

/// A node that can report its type and its parent
pub trait SyntaxNode: Copy {
    /// The node's type name, as used in selectors
    fn node_type(&self) -> &str;

    /// The structural parent, or `None` for the root
    fn parent(&self) -> Option<Self>;

    /// Ancestors from the parent up to the root
    fn ancestors(&self) -> Ancestors<Self> {
        Ancestors {
            next: self.parent(),
        }
    }
}

/// Iterator over a node's ancestors, nearest first
pub struct Ancestors<N> {
    next: Option<N>,
}

impl<N: SyntaxNode> Iterator for Ancestors<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

/// A node positioned in its source text
pub trait SpannedNode: SyntaxNode {
    /// Byte range covered by the node
    fn byte_range(&self) -> Range<usize>;

    /// Direct children in source order
    fn children(&self) -> Vec<Self>;
}

/// A parsed tree
pub trait SyntaxTree {
    type Node<'t>: SpannedNode
    where
        Self: 't;

    fn root_node(&self) -> Self::Node<'_>;
}

/// A parser producing [`SyntaxTree`]s
pub trait LanguageParser {
    type Tree: SyntaxTree;

    /// Parse `source` into a tree, or `None` if the parser gave up
    fn parse(&self, source: &str) -> Option<Self::Tree>;
}
