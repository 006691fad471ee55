//! Rendering highlight results for `diagwiz-highlight`

use serde::Serialize;

use crate::syntax::{HighlightTag, SyntaxHighlights};

/// One token as printed by the CLI. Lines and columns are 1-based and the
/// column range is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'s> {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub tag: HighlightTag,
    pub text: &'s str,
}

/// Flatten highlights into printable records, ordered by position
pub fn token_records<'s>(source: &'s str, highlights: &SyntaxHighlights) -> Vec<TokenRecord<'s>> {
    let lines: Vec<&str> = source.lines().collect();
    highlights
        .iter_sorted()
        .map(|(row, token)| {
            let text = lines
                .get(row)
                .map(|line| char_slice(line, token.start_col, token.end_col))
                .unwrap_or("");
            TokenRecord {
                line: row + 1,
                start: token.start_col + 1,
                end: token.end_col,
                tag: token.tag,
                text,
            }
        })
        .collect()
}

/// `line:start-end tag text`, one token per line
pub fn render_text(records: &[TokenRecord<'_>]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}:{}-{} {} {}\n",
            record.line, record.start, record.end, record.tag, record.text
        ));
    }
    out
}

pub fn render_json(records: &[TokenRecord<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

fn char_slice(line: &str, start: usize, end: usize) -> &str {
    let byte_at = |col: usize| {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    };
    &line[byte_at(start)..byte_at(end)]
}
