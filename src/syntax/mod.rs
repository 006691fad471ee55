//! Syntax highlighting module
//!
//! Resolves highlight tags for syntax nodes from selector rules:
//! - Tag vocabulary and node path selectors
//! - Tag rule tables with longest-match resolution
//! - Language definitions binding a parser to a rule table
//! - A highlight pass producing per-line tokens
//!
//! ## Architecture
//!
//! ```text
//! LanguageSupport → LanguageDefinition ─┬→ LanguageParser::parse → SyntaxTree
//!                                       └→ TagRuleTable::resolve(node type, ancestors)
//!                                            → SyntaxHighlights
//! ```
//!
//! Any parser whose nodes implement [`SyntaxNode`] can be paired with a rule
//! table. The diagwiz parser and tree-sitter grammars both do.

mod highlights;
mod language;
mod rules;
mod selector;
mod support;
mod tags;
mod tree;
mod ts_adapter;

pub use highlights::{collect_highlights, HighlightToken, LineHighlights, SyntaxHighlights};
pub use language::{LanguageDefinition, LanguageDefinitionBuilder, LanguageError};
pub use rules::{DuplicateSelectorWarning, TagRule, TagRuleTable};
pub use selector::{NodeSelector, SelectorError, PATH_SEPARATOR, WILDCARD};
pub use support::{LanguageData, LanguageSupport};
pub use tags::{HighlightTag, UnknownTag};
pub use tree::{Ancestors, LanguageParser, SpannedNode, SyntaxNode, SyntaxTree};
pub use ts_adapter::TreeSitterParser;
