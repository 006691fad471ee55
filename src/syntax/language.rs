//! Language definitions
//!
//! A [`LanguageDefinition`] binds one parser to one tag rule table. It is
//! read-only after construction; all variation comes from the node or source
//! passed to each query.

use std::fmt;

use super::highlights::{collect_highlights, SyntaxHighlights};
use super::rules::TagRuleTable;
use super::tags::HighlightTag;
use super::tree::{LanguageParser, SyntaxNode};

/// Errors raised while defining a language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// `build()` was called before a parser was supplied
    MissingParser { language: String },
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::MissingParser { language } => {
                write!(f, "language `{}` has no parser", language)
            }
        }
    }
}

impl std::error::Error for LanguageError {}

/// A parser paired with the tag rules used to highlight its trees
#[derive(Debug)]
pub struct LanguageDefinition<P> {
    name: String,
    parser: P,
    tag_rules: TagRuleTable,
}

/// Builder for [`LanguageDefinition`]
#[derive(Debug)]
pub struct LanguageDefinitionBuilder<P> {
    name: String,
    parser: Option<P>,
    tag_rules: TagRuleTable,
}

impl<P> LanguageDefinitionBuilder<P> {
    pub fn parser(mut self, parser: P) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn tag_rules(mut self, tag_rules: TagRuleTable) -> Self {
        self.tag_rules = tag_rules;
        self
    }

    /// Finish the definition. Fails if no parser was supplied.
    pub fn build(self) -> Result<LanguageDefinition<P>, LanguageError> {
        let Some(parser) = self.parser else {
            return Err(LanguageError::MissingParser {
                language: self.name,
            });
        };
        Ok(LanguageDefinition::new(self.name, parser, self.tag_rules))
    }
}

impl<P> LanguageDefinition<P> {
    pub fn new(name: impl Into<String>, parser: P, tag_rules: TagRuleTable) -> Self {
        Self {
            name: name.into(),
            parser,
            tag_rules,
        }
    }

    /// Start defining a language; the tag rule table defaults to empty
    pub fn builder(name: impl Into<String>) -> LanguageDefinitionBuilder<P> {
        LanguageDefinitionBuilder {
            name: name.into(),
            parser: None,
            tag_rules: TagRuleTable::default(),
        }
    }

    /// Define a language from an optional parser and a rule table
    pub fn define(
        name: impl Into<String>,
        parser: Option<P>,
        tag_rules: TagRuleTable,
    ) -> Result<Self, LanguageError> {
        let mut builder = Self::builder(name).tag_rules(tag_rules);
        builder.parser = parser;
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn tag_rules(&self) -> &TagRuleTable {
        &self.tag_rules
    }

    /// Resolve the highlight tag for a node from its type and ancestry.
    ///
    /// Walks from the node to the root on every call; nothing is cached.
    pub fn highlight_category_for<N: SyntaxNode>(&self, node: N) -> Option<HighlightTag> {
        let ancestors: Vec<N> = node.ancestors().collect();
        let chain: Vec<&str> = ancestors.iter().map(|n| n.node_type()).collect();
        self.tag_rules.resolve(node.node_type(), &chain)
    }
}

impl<P: LanguageParser> LanguageDefinition<P> {
    /// Parse source text with this language's parser
    pub fn parse(&self, source: &str) -> Option<P::Tree> {
        self.parser.parse(source)
    }

    /// Parse and highlight `source` in one pass
    pub fn highlight(&self, source: &str) -> SyntaxHighlights {
        match self.parse(source) {
            Some(tree) => collect_highlights(self, &tree, source),
            None => {
                tracing::error!("Parse failed for {}", self.name);
                SyntaxHighlights::new(&self.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::TagRule;

    /// Minimal node over a fixed path of types, root first
    #[derive(Clone, Copy)]
    struct PathNode {
        path: &'static [&'static str],
        depth: usize,
    }

    impl SyntaxNode for PathNode {
        fn node_type(&self) -> &str {
            self.path[self.depth]
        }

        fn parent(&self) -> Option<Self> {
            self.depth.checked_sub(1).map(|depth| PathNode {
                path: self.path,
                depth,
            })
        }
    }

    fn leaf(path: &'static [&'static str]) -> PathNode {
        PathNode {
            path,
            depth: path.len() - 1,
        }
    }

    #[test]
    fn test_build_without_parser_fails() {
        let result = LanguageDefinition::<()>::builder("diagwiz").build();
        assert_eq!(
            result.unwrap_err(),
            LanguageError::MissingParser {
                language: "diagwiz".to_string()
            }
        );
    }

    #[test]
    fn test_define_with_parser() {
        let def = LanguageDefinition::define("test", Some(()), TagRuleTable::default()).unwrap();
        assert_eq!(def.name(), "test");
        assert!(def.tag_rules().is_empty());

        let missing = LanguageDefinition::<()>::define("test", None, TagRuleTable::default());
        assert!(missing.is_err());
    }

    #[test]
    fn test_highlight_category_uses_ancestor_chain() {
        let table = TagRuleTable::build([
            TagRule::parse("Identifier", HighlightTag::TypeName).unwrap(),
            TagRule::parse("Alias/Identifier", HighlightTag::VariableName).unwrap(),
        ]);
        let def = LanguageDefinition::builder("test")
            .parser(())
            .tag_rules(table)
            .build()
            .unwrap();

        let in_alias = leaf(&["Program", "Alias", "Identifier"]);
        let in_message = leaf(&["Program", "Message", "Identifier"]);
        let root = leaf(&["Program"]);

        assert_eq!(
            def.highlight_category_for(in_alias),
            Some(HighlightTag::VariableName)
        );
        assert_eq!(
            def.highlight_category_for(in_message),
            Some(HighlightTag::TypeName)
        );
        assert_eq!(def.highlight_category_for(root), None);

        // Repeated queries give the same answer
        assert_eq!(
            def.highlight_category_for(in_alias),
            def.highlight_category_for(in_alias)
        );
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let node = leaf(&["Program", "Alias", "Identifier"]);
        let types: Vec<&str> = node.ancestors().map(|n| n.path[n.depth]).collect();
        assert_eq!(types, vec!["Alias", "Program"]);
    }
}
