//! Error-tolerant recursive descent parser for diagwiz
//!
//! ```text
//! Program  := (Alias | Message | LineComment)*
//! Alias    := "alias" Identifier "="? String ";"?
//! Message  := Identifier Arrow Identifier (":" String)? ";"?
//! ```
//!
//! Punctuation (`=`, `:`, `;`) produces no node. Line comments may appear
//! anywhere and attach to whichever node is open. Unexpected tokens are
//! wrapped in error nodes and reported in [`DiagwizTree::errors`].

use std::ops::Range;

use super::lexer::{tokenize, Token, TokenKind};
use super::tree::{DiagwizTree, NodeData, NodeId, NodeKind, SyntaxError};
use crate::syntax::LanguageParser;

/// Parser for diagwiz documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagwizParser;

impl DiagwizParser {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageParser for DiagwizParser {
    type Tree = DiagwizTree;

    fn parse(&self, source: &str) -> Option<DiagwizTree> {
        Some(parse(source))
    }
}

/// Parse a diagwiz document. Never fails; problems become error nodes.
pub fn parse(source: &str) -> DiagwizTree {
    let tokens = tokenize(source);
    let mut builder = TreeBuilder {
        tokens: &tokens,
        pos: 0,
        nodes: Vec::new(),
        errors: Vec::new(),
        open: Vec::new(),
    };

    builder.start(NodeKind::Program, 0);
    while builder.skip_comments() {
        builder.statement();
    }
    builder.finish_at(source.len());

    tracing::trace!(
        "Parsed {} bytes into {} nodes ({} errors)",
        source.len(),
        builder.nodes.len(),
        builder.errors.len()
    );

    DiagwizTree {
        nodes: builder.nodes,
        errors: builder.errors,
    }
}

struct TreeBuilder<'a> {
    tokens: &'a [Token],
    pos: usize,
    nodes: Vec<NodeData>,
    errors: Vec<SyntaxError>,
    /// Stack of nodes still being built
    open: Vec<NodeId>,
}

impl TreeBuilder<'_> {
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn peek_range(&self) -> Option<Range<usize>> {
        self.tokens.get(self.pos).map(|t| t.range.clone())
    }

    /// End offset of the last consumed token
    fn last_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.range.end)
            .unwrap_or(0)
    }

    fn add_node(&mut self, kind: NodeKind, range: Range<usize>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.open.last().copied();
        self.nodes.push(NodeData {
            kind,
            range,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn start(&mut self, kind: NodeKind, at: usize) {
        let id = self.add_node(kind, at..at);
        self.open.push(id);
    }

    fn finish_at(&mut self, end: usize) {
        if let Some(id) = self.open.pop() {
            self.nodes[id.0].range.end = end;
        }
    }

    fn finish(&mut self) {
        let end = self.last_end();
        self.finish_at(end);
    }

    /// Consume the current token as a leaf node of `kind`
    fn leaf(&mut self, kind: NodeKind) {
        if let Some(range) = self.peek_range() {
            self.add_node(kind, range);
            self.pos += 1;
        }
    }

    fn error(&mut self, range: Range<usize>, message: impl Into<String>) {
        self.errors.push(SyntaxError {
            range,
            message: message.into(),
        });
    }

    /// Attach any comments at the cursor to the open node.
    /// Returns false at end of input.
    fn skip_comments(&mut self) -> bool {
        while self.peek() == Some(TokenKind::LineComment) {
            self.leaf(NodeKind::LineComment);
        }
        self.peek().is_some()
    }

    /// Consume the current token if it is `kind`
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.skip_comments() && self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Expect a token of `kind` and add it as a node, or report `what` missing
    fn expect(&mut self, kind: TokenKind, node: NodeKind, what: &str) -> bool {
        if self.skip_comments() && self.peek() == Some(kind) {
            self.leaf(node);
            return true;
        }
        let at = self.last_end();
        self.error(at..at, format!("expected {}", what));
        false
    }

    fn expect_string(&mut self) -> bool {
        if !self.skip_comments() {
            let at = self.last_end();
            self.error(at..at, "expected string");
            return false;
        }
        match (self.peek(), self.peek_range()) {
            (Some(TokenKind::String { terminated }), Some(range)) => {
                if !terminated {
                    self.error(range, "unterminated string");
                }
                self.leaf(NodeKind::String);
                true
            }
            _ => {
                let at = self.last_end();
                self.error(at..at, "expected string");
                false
            }
        }
    }

    fn statement(&mut self) {
        let Some(range) = self.peek_range() else {
            return;
        };
        match self.peek() {
            Some(TokenKind::AliasKeyword) => self.alias(range.start),
            Some(TokenKind::Identifier) => self.message(range.start),
            Some(TokenKind::Semicolon) => {
                // Empty statement
                self.pos += 1;
            }
            _ => {
                self.error(range.clone(), "expected alias or message");
                self.add_node(NodeKind::Error, range);
                self.pos += 1;
            }
        }
    }

    fn alias(&mut self, start: usize) {
        self.start(NodeKind::Alias, start);
        self.leaf(NodeKind::AliasKeyword);
        if self.expect(TokenKind::Identifier, NodeKind::Identifier, "alias name") {
            self.eat(TokenKind::Equals);
            self.expect_string();
        }
        self.eat(TokenKind::Semicolon);
        self.finish();
    }

    fn message(&mut self, start: usize) {
        self.start(NodeKind::Message, start);
        self.leaf(NodeKind::Identifier);
        if self.expect(TokenKind::Arrow, NodeKind::Arrow, "message arrow")
            && self.expect(TokenKind::Identifier, NodeKind::Identifier, "message target")
            && self.eat(TokenKind::Colon)
        {
            self.expect_string();
        }
        self.eat(TokenKind::Semicolon);
        self.finish();
    }
}
