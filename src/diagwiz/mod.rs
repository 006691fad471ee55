//! Diagwiz language support
//!
//! [`diagwiz()`] is the entry point an editor calls once per document. It
//! pairs the diagwiz parser with the built-in tag rules below.
//!
//! ## Built-in tag rules
//!
//! | Selector             | Tag                  |
//! |----------------------|----------------------|
//! | `LineComment`        | `line-comment`       |
//! | `Alias/alias`        | `definition-keyword` |
//! | `Alias/Identifier`   | `variable-name`      |
//! | `Alias/String`       | `string`             |
//! | `Message/Identifier` | `variable-name`      |
//! | `Message/String`     | `string`             |

mod lexer;
mod parser;
mod tree;

pub use parser::{parse, DiagwizParser};
pub use tree::{DiagwizNode, DiagwizTree, NodeId, NodeKind, SyntaxError};

use crate::config::HighlightConfig;
use crate::syntax::{
    HighlightTag, LanguageData, LanguageDefinition, LanguageSupport, TagRule, TagRuleTable,
};

/// Language name used in logs and highlight results
pub const LANGUAGE_NAME: &str = "diagwiz";

/// Tag rules for the diagwiz grammar, in declaration order
pub const DIAGWIZ_TAG_RULES: &[(&str, HighlightTag)] = &[
    ("LineComment", HighlightTag::LineComment),
    ("Alias/alias", HighlightTag::DefinitionKeyword),
    ("Alias/Identifier", HighlightTag::VariableName),
    ("Alias/String", HighlightTag::String),
    ("Message/Identifier", HighlightTag::VariableName),
    ("Message/String", HighlightTag::String),
];

/// Editor metadata for diagwiz documents
pub const DIAGWIZ_LANGUAGE_DATA: LanguageData = LanguageData {
    display_name: "Diagwiz",
    extensions: &["diag", "diagwiz"],
    line_comment: Some("//"),
};

/// Language support for a diagwiz document
pub type DiagwizSupport = LanguageSupport<DiagwizParser>;

/// Parse the built-in rules. A rule that fails to parse is logged and skipped.
pub fn builtin_tag_rules() -> Vec<TagRule> {
    DIAGWIZ_TAG_RULES
        .iter()
        .filter_map(|&(selector, tag)| match TagRule::parse_many(selector, tag) {
            Ok(rules) => Some(rules),
            Err(e) => {
                tracing::error!("Skipping built-in rule `{}`: {}", selector, e);
                None
            }
        })
        .flatten()
        .collect()
}

/// Build language support for diagwiz with the built-in tag rules
pub fn diagwiz() -> DiagwizSupport {
    build_support(builtin_tag_rules())
}

/// Build language support with user rules from `config` applied after the
/// built-in ones. A user rule for a built-in selector replaces it.
pub fn diagwiz_with_config(config: &HighlightConfig) -> DiagwizSupport {
    let mut rules = builtin_tag_rules();
    rules.extend(config.tag_rules());
    build_support(rules)
}

fn build_support(rules: Vec<TagRule>) -> DiagwizSupport {
    let language = LanguageDefinition::new(
        LANGUAGE_NAME,
        DiagwizParser::new(),
        TagRuleTable::build(rules),
    );
    LanguageSupport::new(language, DIAGWIZ_LANGUAGE_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_all_builtin_rules_parse() {
        assert_eq!(builtin_tag_rules().len(), DIAGWIZ_TAG_RULES.len());
    }

    #[test]
    fn test_builtin_table_has_no_duplicates() {
        let support = diagwiz();
        assert!(support.language().tag_rules().warnings().is_empty());
        assert_eq!(support.language().tag_rules().len(), 6);
    }

    #[test]
    fn test_language_data() {
        let support = diagwiz();
        assert_eq!(support.language().name(), LANGUAGE_NAME);
        assert!(support.matches_path(Path::new("flow.diag")));
        assert!(support.matches_path(Path::new("/tmp/Flow.DIAGWIZ")));
        assert!(!support.matches_path(Path::new("flow.rs")));
        assert!(!support.matches_path(Path::new("diag")));
        assert_eq!(support.data().line_comment, Some("//"));
    }
}
