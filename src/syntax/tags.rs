//! Highlight tag vocabulary
//!
//! The fixed set of presentation categories a tag rule can assign. Themes map
//! these to colors; nothing in this crate attaches meaning to them beyond that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A highlight category assigned to a syntax node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightTag {
    Comment,
    LineComment,
    BlockComment,
    DocComment,
    Keyword,
    DefinitionKeyword,
    ControlKeyword,
    OperatorKeyword,
    VariableName,
    TypeName,
    PropertyName,
    FunctionName,
    String,
    Number,
    Bool,
    Null,
    Constant,
    Operator,
    Punctuation,
    Bracket,
    Separator,
    Invalid,
}

impl HighlightTag {
    /// Every tag, in declaration order
    pub const ALL: &'static [HighlightTag] = &[
        HighlightTag::Comment,
        HighlightTag::LineComment,
        HighlightTag::BlockComment,
        HighlightTag::DocComment,
        HighlightTag::Keyword,
        HighlightTag::DefinitionKeyword,
        HighlightTag::ControlKeyword,
        HighlightTag::OperatorKeyword,
        HighlightTag::VariableName,
        HighlightTag::TypeName,
        HighlightTag::PropertyName,
        HighlightTag::FunctionName,
        HighlightTag::String,
        HighlightTag::Number,
        HighlightTag::Bool,
        HighlightTag::Null,
        HighlightTag::Constant,
        HighlightTag::Operator,
        HighlightTag::Punctuation,
        HighlightTag::Bracket,
        HighlightTag::Separator,
        HighlightTag::Invalid,
    ];

    /// Stable kebab-case name, matching the serialized form
    pub fn name(self) -> &'static str {
        match self {
            HighlightTag::Comment => "comment",
            HighlightTag::LineComment => "line-comment",
            HighlightTag::BlockComment => "block-comment",
            HighlightTag::DocComment => "doc-comment",
            HighlightTag::Keyword => "keyword",
            HighlightTag::DefinitionKeyword => "definition-keyword",
            HighlightTag::ControlKeyword => "control-keyword",
            HighlightTag::OperatorKeyword => "operator-keyword",
            HighlightTag::VariableName => "variable-name",
            HighlightTag::TypeName => "type-name",
            HighlightTag::PropertyName => "property-name",
            HighlightTag::FunctionName => "function-name",
            HighlightTag::String => "string",
            HighlightTag::Number => "number",
            HighlightTag::Bool => "bool",
            HighlightTag::Null => "null",
            HighlightTag::Constant => "constant",
            HighlightTag::Operator => "operator",
            HighlightTag::Punctuation => "punctuation",
            HighlightTag::Bracket => "bracket",
            HighlightTag::Separator => "separator",
            HighlightTag::Invalid => "invalid",
        }
    }
}

impl fmt::Display for HighlightTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown highlight tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for HighlightTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HighlightTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
