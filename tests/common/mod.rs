//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use diagwiz_lang::syntax::{HighlightTag, SyntaxHighlights, TagRule, TagRuleTable};
use diagwiz_lang::{diagwiz, HighlightConfig};

/// Build a rule table from `(selector, tag)` pairs
pub fn table(rules: &[(&str, HighlightTag)]) -> TagRuleTable {
    TagRuleTable::build(
        rules
            .iter()
            .map(|&(selector, tag)| TagRule::parse(selector, tag).unwrap()),
    )
}

/// Highlight `source` with the built-in diagwiz rules
pub fn highlight(source: &str) -> SyntaxHighlights {
    diagwiz().highlight(source)
}

/// Highlight `source` with the built-in rules plus config from YAML
pub fn highlight_with_yaml(source: &str, yaml: &str) -> SyntaxHighlights {
    let config = HighlightConfig::from_yaml(yaml).unwrap();
    diagwiz_lang::diagwiz_with_config(&config).highlight(source)
}

/// Collect `(line, text, tag)` for every token, in source order
pub fn tagged_text<'s>(
    source: &'s str,
    highlights: &SyntaxHighlights,
) -> Vec<(usize, &'s str, HighlightTag)> {
    diagwiz_lang::output::token_records(source, highlights)
        .into_iter()
        .map(|record| (record.line - 1, record.text, record.tag))
        .collect()
}
