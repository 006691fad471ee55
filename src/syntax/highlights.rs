//! Syntax highlighting data structures and the highlight pass
//!
//! Defines tokens, line highlights, and document-level highlight state, and
//! walks a parsed tree to fill them in.

use std::collections::HashMap;
use std::ops::Range;

use serde::Serialize;

use super::language::LanguageDefinition;
use super::tags::HighlightTag;
use super::tree::{SpannedNode, SyntaxTree};

/// A single highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightToken {
    /// Start column (0-indexed, inclusive)
    pub start_col: usize,
    /// End column (exclusive)
    pub end_col: usize,
    pub tag: HighlightTag,
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default)]
pub struct LineHighlights {
    /// Tokens sorted by start_col
    pub tokens: Vec<HighlightToken>,
}

impl LineHighlights {
    /// Get the tag for a given column, if any
    pub fn highlight_at(&self, col: usize) -> Option<HighlightTag> {
        for token in &self.tokens {
            if col >= token.start_col && col < token.end_col {
                return Some(token.tag);
            }
            if token.start_col > col {
                break; // tokens are sorted, no need to continue
            }
        }
        None
    }
}

/// Complete highlight state for a document
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlights {
    /// Map of line number (0-indexed) → tokens
    pub lines: HashMap<usize, LineHighlights>,
    /// Name of the language that produced these highlights
    pub language: String,
}

impl SyntaxHighlights {
    /// Create new empty highlights for a language
    pub fn new(language: &str) -> Self {
        Self {
            lines: HashMap::new(),
            language: language.to_string(),
        }
    }

    /// Get highlights for a specific line
    pub fn get_line(&self, line: usize) -> Option<&LineHighlights> {
        self.lines.get(&line)
    }

    /// Get highlight tokens for a line, or empty slice if none
    pub fn get_line_tokens(&self, line: usize) -> &[HighlightToken] {
        self.lines
            .get(&line)
            .map(|lh| lh.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Tag covering a (line, column) position
    pub fn highlight_at(&self, line: usize, col: usize) -> Option<HighlightTag> {
        self.lines.get(&line)?.highlight_at(col)
    }

    /// All tokens as (line, token), ordered by line then column
    pub fn iter_sorted(&self) -> impl Iterator<Item = (usize, &HighlightToken)> {
        let mut rows: Vec<usize> = self.lines.keys().copied().collect();
        rows.sort_unstable();
        rows.into_iter().flat_map(move |row| {
            self.get_line_tokens(row)
                .iter()
                .map(move |token| (row, token))
        })
    }

    /// Total number of tokens across all lines
    pub fn token_count(&self) -> usize {
        self.lines.values().map(|lh| lh.tokens.len()).sum()
    }

    fn push(&mut self, row: usize, start_col: usize, end_col: usize, tag: HighlightTag) {
        if start_col < end_col {
            self.lines.entry(row).or_default().tokens.push(HighlightToken {
                start_col,
                end_col,
                tag,
            });
        }
    }
}

/// Byte offsets of line starts, for byte → (row, column) conversion
struct LineIndex<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { source, starts }
    }

    fn row_of(&self, byte: usize) -> usize {
        match self.starts.binary_search(&byte) {
            Ok(row) => row,
            Err(next) => next - 1,
        }
    }

    /// Line text without its terminator
    fn line(&self, row: usize) -> &'a str {
        let start = self.starts[row];
        let end = self
            .starts
            .get(row + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        let line = &self.source[start..end];
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Character column of a byte offset on its row
    fn char_col(&self, row: usize, byte: usize) -> usize {
        byte_to_char_col(self.line(row), byte - self.starts[row])
    }
}

/// Convert a byte column to a character column on a given line.
/// Offsets inside a multi-byte character snap back to its start.
fn byte_to_char_col(line: &str, byte_col: usize) -> usize {
    // Clamp to line length
    let byte_col = byte_col.min(line.len());
    let mut valid_byte = byte_col;
    while valid_byte > 0 && !line.is_char_boundary(valid_byte) {
        valid_byte -= 1;
    }
    line[..valid_byte].chars().count()
}

/// One step of the highlight walk
enum Step<N> {
    /// Visit a node, inheriting the tag of its nearest tagged ancestor
    Enter(N, Option<HighlightTag>),
    /// Paint a byte range not covered by any child
    Fill(Range<usize>, HighlightTag),
}

/// Byte spans in source order, merging adjacent spans with the same tag
#[derive(Default)]
struct Spans {
    spans: Vec<(Range<usize>, HighlightTag)>,
}

impl Spans {
    fn push(&mut self, range: Range<usize>, tag: HighlightTag) {
        if range.start >= range.end {
            return;
        }
        if let Some((last, last_tag)) = self.spans.last_mut() {
            if *last_tag == tag && last.end == range.start {
                last.end = range.end;
                return;
            }
        }
        self.spans.push((range, tag));
    }
}

/// Walk `tree` and emit tokens for every node the language's tag rules
/// assign a tag to.
///
/// Every node is visited. A node's own tag wins over the tag of any
/// ancestor; a tagged node paints only the parts of its range its children
/// do not tag themselves. Multi-line spans are split into one token per line.
pub fn collect_highlights<P, T: SyntaxTree>(
    language: &LanguageDefinition<P>,
    tree: &T,
    source: &str,
) -> SyntaxHighlights {
    let mut highlights = SyntaxHighlights::new(language.name());
    let index = LineIndex::new(source);
    let clamp = |range: Range<usize>| range.start.min(source.len())..range.end.min(source.len());

    let mut spans = Spans::default();
    let mut stack = vec![Step::Enter(tree.root_node(), None)];
    let mut visited = 0usize;
    while let Some(step) = stack.pop() {
        let (node, inherited) = match step {
            Step::Fill(range, tag) => {
                spans.push(range, tag);
                continue;
            }
            Step::Enter(node, inherited) => (node, inherited),
        };
        visited += 1;

        let tag = language.highlight_category_for(node).or(inherited);
        let range = clamp(node.byte_range());
        let children = node.children();

        let Some(tag) = tag else {
            // Push in reverse so children pop in source order
            stack.extend(children.into_iter().rev().map(|c| Step::Enter(c, None)));
            continue;
        };

        let mut steps = Vec::with_capacity(children.len() * 2 + 1);
        let mut cursor = range.start;
        for child in children {
            let child_range = clamp(child.byte_range());
            steps.push(Step::Fill(cursor..child_range.start.min(range.end), tag));
            steps.push(Step::Enter(child, Some(tag)));
            cursor = cursor.max(child_range.end.min(range.end));
        }
        steps.push(Step::Fill(cursor..range.end, tag));
        stack.extend(steps.into_iter().rev());
    }

    for (range, tag) in spans.spans {
        let (start, end) = (range.start, range.end);
        let start_row = index.row_of(start);
        let end_row = index.row_of(end);
        if start_row == end_row {
            highlights.push(
                start_row,
                index.char_col(start_row, start),
                index.char_col(end_row, end),
                tag,
            );
        } else {
            for row in start_row..=end_row {
                let line_char_len = index.line(row).chars().count();
                let (start_char, end_char) = if row == start_row {
                    // First line: from start to end of line
                    (index.char_col(row, start), line_char_len)
                } else if row == end_row {
                    // Last line: from start of line to end position
                    (0, index.char_col(row, end))
                } else {
                    (0, line_char_len)
                };
                highlights.push(row, start_char, end_char, tag);
            }
        }
    }

    // Sort tokens within each line by start column
    for line_highlights in highlights.lines.values_mut() {
        line_highlights
            .tokens
            .sort_by_key(|t| (t.start_col, t.end_col));
    }

    tracing::trace!(
        "Highlighted {} nodes into {} tokens for {}",
        visited,
        highlights.token_count(),
        language.name()
    );

    highlights
}
