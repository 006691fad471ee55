//! Arena syntax tree produced by the diagwiz parser

use std::fmt;
use std::ops::Range;

use crate::syntax::{SpannedNode, SyntaxNode, SyntaxTree};

/// Node types of the diagwiz grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    LineComment,
    Alias,
    /// The `alias` keyword token
    AliasKeyword,
    Identifier,
    String,
    Message,
    Arrow,
    /// Unexpected input wrapped during error recovery
    Error,
}

impl NodeKind {
    /// Type name as used in tag rule selectors
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::LineComment => "LineComment",
            NodeKind::Alias => "Alias",
            NodeKind::AliasKeyword => "alias",
            NodeKind::Identifier => "Identifier",
            NodeKind::String => "String",
            NodeKind::Message => "Message",
            NodeKind::Arrow => "Arrow",
            NodeKind::Error => "⚠",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a node in its [`DiagwizTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) range: Range<usize>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub range: Range<usize>,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message, self.range.start, self.range.end
        )
    }
}

/// Parsed diagwiz document. The root is always a `Program` node.
#[derive(Debug, Clone)]
pub struct DiagwizTree {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) errors: Vec<SyntaxError>,
}

impl DiagwizTree {
    pub fn root(&self) -> DiagwizNode<'_> {
        DiagwizNode {
            tree: self,
            id: NodeId(0),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<DiagwizNode<'_>> {
        (id.0 < self.nodes.len()).then_some(DiagwizNode { tree: self, id })
    }

    /// Recoverable syntax errors, in source order
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order
    pub fn descendants(&self) -> impl Iterator<Item = DiagwizNode<'_>> {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.child_nodes().rev());
            Some(node)
        })
    }

    /// Render the tree as an indented outline, one node per line
    pub fn to_outline(&self, source: &str) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            let depth = node.ancestors().count();
            let range = node.range();
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.kind().name());
            out.push_str(&format!(" {}..{}", range.start, range.end));
            if node.child_nodes().len() == 0 {
                if let Some(text) = source.get(range) {
                    out.push_str(&format!(" {:?}", text));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// A handle to one node of a [`DiagwizTree`]
#[derive(Clone, Copy)]
pub struct DiagwizNode<'t> {
    tree: &'t DiagwizTree,
    id: NodeId,
}

impl<'t> DiagwizNode<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    pub fn range(&self) -> Range<usize> {
        self.data().range.clone()
    }

    /// Source text covered by this node
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or("")
    }

    pub fn child_nodes(
        &self,
    ) -> impl DoubleEndedIterator<Item = DiagwizNode<'t>> + ExactSizeIterator {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| DiagwizNode { tree, id })
    }

    /// First child of the given kind
    pub fn child(&self, kind: NodeKind) -> Option<DiagwizNode<'t>> {
        self.child_nodes().find(|c| c.kind() == kind)
    }
}

impl fmt::Debug for DiagwizNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.kind(), self.range())
    }
}

impl PartialEq for DiagwizNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for DiagwizNode<'_> {}

impl SyntaxNode for DiagwizNode<'_> {
    fn node_type(&self) -> &str {
        self.kind().name()
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| DiagwizNode {
            tree: self.tree,
            id,
        })
    }
}

impl SpannedNode for DiagwizNode<'_> {
    fn byte_range(&self) -> Range<usize> {
        self.range()
    }

    fn children(&self) -> Vec<Self> {
        self.child_nodes().collect()
    }
}

impl SyntaxTree for DiagwizTree {
    type Node<'t> = DiagwizNode<'t>;

    fn root_node(&self) -> DiagwizNode<'_> {
        self.root()
    }
}
